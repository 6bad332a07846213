//! jssc - compiles JSS dialect sources to CSS
//!
//! The JSS generation of the toolchain: one self contained embedded library
//! module, `.jss` sources, `toCSS();` as the invocation statement.

use stylejs_core::cli;
use stylejs_core::resources::{ModuleSpec, Toolchain};

const MODULES: &[ModuleSpec] = &[ModuleSpec {
    name: "JSS",
    flag: 'j',
    bundled: include_str!("../runtime/JSS.js"),
}];

const TOOLCHAIN: Toolchain = Toolchain {
    name: "jssc",
    about: "Compiles JSS dialect sources to CSS",
    dialect: "JSS",
    library_version: "0.0.1",
    tool_version: env!("CARGO_PKG_VERSION"),
    source_suffix: ".jss",
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
    use stylejs_core::pipeline;
    use stylejs_core::resources::{self, ModuleOverrides};

    #[test]
    fn test_single_library_module() {
        let names: Vec<&str> = TOOLCHAIN.modules.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["JSS"]);
        assert_eq!(TOOLCHAIN.modules[0].flag, 'j');
    }

    #[test]
    fn test_compile_simple_jss_source() {
        let overrides = ModuleOverrides::new();
        let library = resources::library_texts(&TOOLCHAIN, &overrides);

        let css = pipeline::compile(
            &library,
            &["JSS({body: {color: 'red'}});"],
            TOOLCHAIN.invocation,
        )
        .unwrap();

        assert_eq!(css, "body {\n\tcolor: red;\n}");
    }

    #[test]
    fn test_compile_nested_selectors() {
        let overrides = ModuleOverrides::new();
        let library = resources::library_texts(&TOOLCHAIN, &overrides);

        let css = pipeline::compile(
            &library,
            &["JSS({nav: {ul: {list_style: 'none'}, $hover: {color: 'black'}}});"],
            TOOLCHAIN.invocation,
        )
        .unwrap();

        assert!(css.contains("nav ul {\n\tlist-style: none;\n}"));
        assert!(css.contains("nav:hover {\n\tcolor: black;\n}"));
    }

    #[test]
    fn test_override_replaces_the_whole_library() {
        let mut overrides = ModuleOverrides::new();
        overrides.set(
            "JSS",
            "function toCSS() { return 'patched { display: none }'; }".to_string(),
        );

        let library = resources::library_texts(&TOOLCHAIN, &overrides);

        let css = pipeline::compile(&library, &["var unused = 1;\n"], TOOLCHAIN.invocation).unwrap();

        assert_eq!(css, "patched { display: none }");
    }
}
