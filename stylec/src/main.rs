//! stylec - compiles Style.js dialect sources to CSS
//!
//! The Style generation of the toolchain: three embedded library modules in
//! dependency order (Type, Util, Style), `.style` sources, `toCSS();` as the
//! invocation statement.

use stylejs_core::cli;
use stylejs_core::resources::{ModuleSpec, Toolchain};

const MODULES: &[ModuleSpec] = &[
    ModuleSpec {
        name: "Type",
        flag: 't',
        bundled: include_str!("../runtime/Type.js"),
    },
    ModuleSpec {
        name: "Util",
        flag: 'u',
        bundled: include_str!("../runtime/Util.js"),
    },
    ModuleSpec {
        name: "Style",
        flag: 's',
        bundled: include_str!("../runtime/Style.js"),
    },
];

const TOOLCHAIN: Toolchain = Toolchain {
    name: "stylec",
    about: "Compiles Style.js dialect sources to CSS",
    dialect: "Style.js",
    library_version: "0.0.1",
    tool_version: env!("CARGO_PKG_VERSION"),
    source_suffix: ".style",
    output_suffix: ".css",
    invocation: "toCSS();",
    modules: MODULES,
};

fn main() {
    cli::run(&TOOLCHAIN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylejs_core::resources::{self, ModuleOverrides};
    use stylejs_core::pipeline;

    #[test]
    fn test_module_order_is_dependency_order() {
        let names: Vec<&str> = TOOLCHAIN.modules.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Type", "Util", "Style"]);
    }

    #[test]
    fn test_bundled_modules_are_not_empty() {
        for module in TOOLCHAIN.modules {
            assert!(!module.bundled.trim().is_empty(), "{} is empty", module.name);
        }
    }

    #[test]
    fn test_compile_simple_style_source() {
        let overrides = ModuleOverrides::new();
        let library = resources::library_texts(&TOOLCHAIN, &overrides);

        let css = pipeline::compile(
            &library,
            &["Style({body: {color: 'red'}});"],
            TOOLCHAIN.invocation,
        )
        .unwrap();

        assert_eq!(css, "body {\n\tcolor: red;\n}");
    }

    #[test]
    fn test_compile_nested_and_pseudo_selectors() {
        let overrides = ModuleOverrides::new();
        let library = resources::library_texts(&TOOLCHAIN, &overrides);

        let css = pipeline::compile(
            &library,
            &["Style({a: {font_weight: 'bold', $hover: {text_decoration: 'underline'}}});"],
            TOOLCHAIN.invocation,
        )
        .unwrap();

        assert!(css.contains("a {\n\tfont-weight: bold;\n}"));
        assert!(css.contains("a:hover {\n\ttext-decoration: underline;\n}"));
    }

    #[test]
    fn test_compile_property_group() {
        let overrides = ModuleOverrides::new();
        let library = resources::library_texts(&TOOLCHAIN, &overrides);

        let css = pipeline::compile(
            &library,
            &["Style({body: {font: Property({weight: 'bold', size: '12px'})}});"],
            TOOLCHAIN.invocation,
        )
        .unwrap();

        assert!(css.contains("font-weight: bold;"));
        assert!(css.contains("font-size: 12px;"));
    }

    #[test]
    fn test_inputs_concatenate_in_order() {
        let overrides = ModuleOverrides::new();
        let library = resources::library_texts(&TOOLCHAIN, &overrides);

        let css = pipeline::compile(
            &library,
            &[
                "Style({header: {margin: 0}});\n",
                "Style({footer: {padding: 0}});\n",
            ],
            TOOLCHAIN.invocation,
        )
        .unwrap();

        let header_pos = css.find("header").unwrap();
        let footer_pos = css.find("footer").unwrap();
        assert!(header_pos < footer_pos);
    }

    #[test]
    fn test_library_version_is_queryable_through_engine() {
        let overrides = ModuleOverrides::new();
        let library = resources::library_texts(&TOOLCHAIN, &overrides);

        let css = pipeline::compile(
            &library,
            &["Style({v: {content: Style.getVersion()}});"],
            TOOLCHAIN.invocation,
        )
        .unwrap();

        assert!(css.contains(TOOLCHAIN.library_version));
    }
}
