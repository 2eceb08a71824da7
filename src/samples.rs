// Example inputs for manual exploration
use crate::language::Dialect;

const JAVA_SAMPLE: &str = "int sumPairs(int[] arr, int n)
{
  int total = 0;
  for (int i = 0; i < n; i++)
  {
    for (int j = 0; j < n; j++)
    {
      total += arr[i] + arr[j];
    }
  }

  if (n == 0) return 0;
  return total + sumPairs(arr, n - 1);
}";

const C_SAMPLE: &str = "int sumOfPairs(int arr[], int n)
{
  int total = 0;
  for (int i = 0; i < n; i++)
  {
    for (int j = 0; j < n; j++)
    {
      total += arr[i] + arr[j];
    }
  }

  if (n == 0) return 0;
  return total + sumOfPairs(arr, n - 1);
}";

pub fn preset(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Java => JAVA_SAMPLE,
        Dialect::C => C_SAMPLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::language::LanguageLabel;

    #[test]
    fn test_presets_are_recursive_nested_loops() {
        for (dialect, name) in [(Dialect::Java, "sumPairs"), (Dialect::C, "sumOfPairs")] {
            let analysis = analyze(preset(dialect));
            let result = analysis.report().expect("preset is not blank");
            assert_eq!(result.loops.for_count, 2);
            assert_eq!(result.recursion.recursive_fns, vec![name]);
            assert!(!result.infinite_loop_detected);
            // Allman braces: each braceless header plus its brace line adds a level.
            assert_eq!(result.nest_depth, 5);
            let complexity = result.complexity.as_ref().unwrap();
            assert_eq!(complexity.label, "O(n³) or higher (with recursion)");
        }
    }

    #[test]
    fn test_presets_classify_as_generic() {
        // Neither preset carries a dialect signal.
        let result = analyze(preset(Dialect::Java));
        assert_eq!(
            result.report().unwrap().language.label,
            LanguageLabel::GenericStyle
        );
    }
}
