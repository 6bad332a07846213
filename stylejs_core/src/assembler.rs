//! Script assembler: ordered fragment join into one executable program text
//!
//! The separator and ordering rules here are load-bearing: library modules
//! first (blank-line separated), then the user inputs concatenated as one
//! logical source, then the invocation statement on its own trailing line.
//! No validation of fragment content happens here; syntactic correctness is
//! entirely the execution engine's concern.

/// Separator between library modules and before the user inputs
const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Assemble library texts, input texts and the invocation statement into a
/// single program text.
///
/// Callers never invoke this with zero inputs; the dispatcher reports
/// "no valid files" before assembly happens.
pub fn assemble(library_texts: &[&str], input_texts: &[&str], invocation: &str) -> String {
    let mut program = String::with_capacity(estimated_size(library_texts, input_texts, invocation));

    for (index, library) in library_texts.iter().enumerate() {
        if index > 0 {
            program.push_str(FRAGMENT_SEPARATOR);
        }
        program.push_str(library);
    }

    if !library_texts.is_empty() {
        program.push_str(FRAGMENT_SEPARATOR);
    }

    // Successive inputs are one logical source: no separator between them
    for input in input_texts {
        program.push_str(input);
    }

    program.push('\n');
    program.push_str(invocation);

    program
}

fn estimated_size(library_texts: &[&str], input_texts: &[&str], invocation: &str) -> usize {
    let library_len: usize = library_texts.iter().map(|t| t.len()).sum();
    let input_len: usize = input_texts.iter().map(|t| t.len()).sum();

    library_len + input_len + invocation.len() + (library_texts.len() + 1) * FRAGMENT_SEPARATOR.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_order_and_separators() {
        let program = assemble(&["LIB_A", "LIB_B"], &["user1;", "user2;"], "toCSS();");

        assert_eq!(program, "LIB_A\n\nLIB_B\n\nuser1;user2;\ntoCSS();");
    }

    #[test]
    fn test_invocation_is_always_last() {
        let program = assemble(&["lib"], &["input"], "toCSS();");

        assert!(program.ends_with("\ntoCSS();"));
    }

    #[test]
    fn test_single_input_no_trailing_separator_before_it() {
        let program = assemble(&["lib"], &["body();"], "toCSS();");

        assert_eq!(program, "lib\n\nbody();\ntoCSS();");
    }

    #[test]
    fn test_inputs_concatenated_without_separator() {
        let with_order_a = assemble(&[], &["a", "b"], "run();");
        let with_order_b = assemble(&[], &["b", "a"], "run();");

        // Input order is observable in the assembled program
        assert_eq!(with_order_a, "ab\nrun();");
        assert_eq!(with_order_b, "ba\nrun();");
        assert_ne!(with_order_a, with_order_b);
    }

    #[test]
    fn test_no_library_modules() {
        let program = assemble(&[], &["input"], "toCSS();");

        assert_eq!(program, "input\ntoCSS();");
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let first = assemble(&["lib1", "lib2"], &["in1", "in2"], "toCSS();");
        let second = assemble(&["lib1", "lib2"], &["in1", "in2"], "toCSS();");

        assert_eq!(first, second);
    }
}
