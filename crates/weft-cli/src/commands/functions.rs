//! Functions command handler

use weft::Kernel;

/// One line per registered function: qualified name and description
pub fn run_functions(kernel: &Kernel) -> String {
    let mut lines = Vec::new();
    for name in kernel.function_names() {
        let description = kernel
            .plugin(&name.plugin_name)
            .and_then(|plugin| plugin.get(&name.function_name))
            .and_then(|function| function.metadata().description.clone())
            .unwrap_or_default();
        lines.push(format!("{}\t{}", name.qualified(), description).trim_end().to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_kernel;

    #[test]
    fn test_lists_core_functions() {
        let kernel = core_kernel(Default::default()).unwrap();
        let output = run_functions(&kernel);
        let first = output.lines().next().unwrap();
        assert!(first.starts_with("math-Add\t"));
        assert_eq!(output.lines().count(), 8);
    }
}
