// Matrix Expansion
// Expands a build matrix into the concrete list of axes to execute

use crate::execution::axis::Axis;
use crate::parser::models::Matrix;

/// Highest 0-based variable index assigned on an axis
pub const LIMIT_TAGS: usize = 10;

/// Highest 0-based permutation index emitted
pub const LIMIT_AXIS: usize = 25;

/// Caps applied during expansion.
///
/// Both limits are inclusive 0-based indices, so the effective caps are
/// `tags + 1` variables per axis and `axes + 1` axes. Anything beyond them is
/// dropped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixLimits {
    pub tags: usize,
    pub axes: usize,
}

impl Default for MatrixLimits {
    fn default() -> Self {
        Self {
            tags: LIMIT_TAGS,
            axes: LIMIT_AXIS,
        }
    }
}

impl MatrixLimits {
    /// Maximum number of variables assigned on a single axis
    pub fn max_tags(&self) -> usize {
        self.tags.saturating_add(1)
    }

    /// Maximum number of axes produced by one expansion
    pub fn max_axes(&self) -> usize {
        self.axes.saturating_add(1)
    }
}

/// Matrix expander using mixed-radix enumeration
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixExpander {
    limits: MatrixLimits,
}

impl MatrixExpander {
    pub fn with_limits(limits: MatrixLimits) -> Self {
        Self { limits }
    }

    /// Expand a matrix with the default limits
    pub fn expand(matrix: &Matrix) -> Vec<Axis> {
        Self::default().expand_matrix(matrix)
    }

    /// Total number of permutations before any cap is applied.
    ///
    /// This is the cartesian product of the value list lengths, or 0 for an
    /// empty matrix. Saturates at `usize::MAX`.
    pub fn permutations(matrix: &Matrix) -> usize {
        if matrix.is_empty() {
            return 0;
        }
        matrix
            .iter()
            .fold(1usize, |total, var| total.saturating_mul(var.values.len()))
    }

    /// Number of axes `expand_matrix` returns for this matrix
    pub fn axis_count(&self, matrix: &Matrix) -> usize {
        Self::permutations(matrix).min(self.limits.max_axes())
    }

    /// Expand a matrix into its axes.
    ///
    /// Permutation `p` selects, for each variable, the digit of `p` written
    /// in mixed radix where each variable's base is its number of values. The
    /// last declared variable is the least significant digit and cycles
    /// fastest.
    pub fn expand_matrix(&self, matrix: &Matrix) -> Vec<Axis> {
        let total = Self::permutations(matrix);
        let count = self.axis_count(matrix);

        tracing::debug!(
            variables = matrix.len(),
            permutations = total,
            axes = count,
            "expanding build matrix"
        );
        if count < total {
            tracing::debug!(
                dropped = total - count,
                limit = self.limits.axes,
                "axis limit reached, truncating matrix"
            );
        }
        if count > 0 && matrix.len() > self.limits.max_tags() {
            tracing::debug!(
                dropped = matrix.len() - self.limits.max_tags(),
                limit = self.limits.tags,
                "tag limit reached, truncating axes"
            );
        }

        (0..count).map(|p| self.axis_at(matrix, p)).collect()
    }

    /// Build the axis for permutation index `p`
    fn axis_at(&self, matrix: &Matrix, p: usize) -> Axis {
        let digits = Self::digits(matrix, p);

        let mut axis = Axis::new();
        for (i, (var, digit)) in matrix.iter().zip(digits).enumerate() {
            if i > self.limits.tags {
                break;
            }
            axis.insert(var.name.as_str(), var.values[digit].as_str());
        }
        axis
    }

    /// Mixed-radix digits of `p`, one per variable in declaration order.
    ///
    /// Variables past the tag limit still take part so the selected indices
    /// match those of an uncapped expansion.
    fn digits(matrix: &Matrix, p: usize) -> Vec<usize> {
        let mut digits = vec![0; matrix.len()];
        let mut rem = p;
        for (slot, var) in digits.iter_mut().zip(matrix.iter()).rev() {
            let base = var.values.len();
            *slot = rem % base;
            rem /= base;
        }
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn axis(pairs: &[(&str, &str)]) -> Axis {
        pairs.iter().copied().collect()
    }

    fn uniform_matrix(variables: usize, values: usize) -> Matrix {
        (0..variables)
            .map(|v| {
                (
                    format!("VAR_{}", v),
                    (0..values).map(|i| format!("{}", i)).collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    #[test]
    fn test_go_redis_example() {
        let matrix: Matrix = [("go", vec!["1.8", "1.9"]), ("redis", vec!["2.8", "3.0"])]
            .into_iter()
            .collect();

        let axes = MatrixExpander::expand(&matrix);

        assert_eq!(
            axes,
            vec![
                axis(&[("go", "1.8"), ("redis", "2.8")]),
                axis(&[("go", "1.8"), ("redis", "3.0")]),
                axis(&[("go", "1.9"), ("redis", "2.8")]),
                axis(&[("go", "1.9"), ("redis", "3.0")]),
            ]
        );

        let rendered: Vec<_> = axes.iter().map(|a| a.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "go=1.8,redis=2.8",
                "go=1.8,redis=3.0",
                "go=1.9,redis=2.8",
                "go=1.9,redis=3.0",
            ]
        );
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = Matrix::new();
        assert!(MatrixExpander::expand(&matrix).is_empty());
        assert_eq!(MatrixExpander::permutations(&matrix), 0);
    }

    #[test]
    fn test_single_value_variables_do_not_branch() {
        let matrix: Matrix = [
            ("os", vec!["linux"]),
            ("go", vec!["1.8", "1.9", "1.10"]),
            ("arch", vec!["amd64"]),
        ]
        .into_iter()
        .collect();

        let axes = MatrixExpander::expand(&matrix);

        assert_eq!(axes.len(), 3);
        for (a, go) in axes.iter().zip(["1.8", "1.9", "1.10"]) {
            assert_eq!(a.get("os"), Some("linux"));
            assert_eq!(a.get("arch"), Some("amd64"));
            assert_eq!(a.get("go"), Some(go));
        }
    }

    #[test]
    fn test_cardinality_matches_product() {
        for (vars, vals) in [(1, 1), (1, 5), (2, 3), (3, 2), (2, 5), (1, 26)] {
            let matrix = uniform_matrix(vars, vals);
            let expected = vals.pow(vars as u32);
            assert_eq!(MatrixExpander::permutations(&matrix), expected);
            assert_eq!(MatrixExpander::expand(&matrix).len(), expected.min(26));
        }
    }

    #[test]
    fn test_complete_cartesian_product_below_cap() {
        let matrix: Matrix = [
            ("a", vec!["1", "2"]),
            ("b", vec!["x", "y", "z"]),
            ("c", vec!["p", "q"]),
        ]
        .into_iter()
        .collect();

        let axes = MatrixExpander::expand(&matrix);
        assert_eq!(axes.len(), 12);

        let unique: HashSet<String> = axes.iter().map(|a| a.to_string()).collect();
        assert_eq!(unique.len(), 12);

        for a in ["1", "2"] {
            for b in ["x", "y", "z"] {
                for c in ["p", "q"] {
                    let key = format!("a={},b={},c={}", a, b, c);
                    assert!(unique.contains(&key), "missing {}", key);
                }
            }
        }
    }

    #[test]
    fn test_last_variable_cycles_fastest() {
        let matrix: Matrix = [("a", vec!["1", "2"]), ("b", vec!["x", "y", "z"])]
            .into_iter()
            .collect();

        let rendered: Vec<_> = MatrixExpander::expand(&matrix)
            .iter()
            .map(|a| a.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec!["a=1,b=x", "a=1,b=y", "a=1,b=z", "a=2,b=x", "a=2,b=y", "a=2,b=z"]
        );
    }

    #[test]
    fn test_axis_cap_truncates_to_first_indices() {
        // 3 * 3 * 3 * 2 = 54 permutations
        let matrix: Matrix = [
            ("a", vec!["a0", "a1", "a2"]),
            ("b", vec!["b0", "b1", "b2"]),
            ("c", vec!["c0", "c1", "c2"]),
            ("d", vec!["d0", "d1"]),
        ]
        .into_iter()
        .collect();

        let axes = MatrixExpander::expand(&matrix);
        assert_eq!(MatrixExpander::permutations(&matrix), 54);
        assert_eq!(axes.len(), 26);

        for (p, a) in axes.iter().enumerate() {
            let d = p % 2;
            let c = (p / 2) % 3;
            let b = (p / 6) % 3;
            let aa = (p / 18) % 3;
            let expected = format!("a=a{},b=b{},c=c{},d=d{}", aa, b, c, d);
            assert_eq!(a.to_string(), expected, "permutation {}", p);
        }
    }

    #[test]
    fn test_exactly_at_axis_cap() {
        let matrix = uniform_matrix(1, 26);
        assert_eq!(MatrixExpander::expand(&matrix).len(), 26);

        let matrix = uniform_matrix(1, 27);
        let axes = MatrixExpander::expand(&matrix);
        assert_eq!(axes.len(), 26);
        assert_eq!(axes[25].get("VAR_0"), Some("25"));
    }

    #[test]
    fn test_tag_cap_drops_later_variables() {
        let matrix = uniform_matrix(15, 1);
        let axes = MatrixExpander::expand(&matrix);

        assert_eq!(axes.len(), 1);
        let only = &axes[0];
        assert_eq!(only.len(), 11);
        for v in 0..11 {
            assert_eq!(only.get(&format!("VAR_{}", v)), Some("0"));
        }
        for v in 11..15 {
            assert!(!only.contains(&format!("VAR_{}", v)));
        }
    }

    #[test]
    fn test_tag_cap_keeps_full_radix() {
        // The dropped twelfth variable still counts toward the enumeration
        let mut matrix = uniform_matrix(11, 1);
        matrix.insert("LAST", ["x", "y"]);

        let axes = MatrixExpander::expand(&matrix);
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[0], axes[1]);
        assert!(axes.iter().all(|a| a.len() == 11 && !a.contains("LAST")));
    }

    #[test]
    fn test_empty_value_list_yields_no_axes() {
        let matrix: Matrix = [("go", vec!["1.8", "1.9"]), ("redis", vec![])]
            .into_iter()
            .collect();
        assert_eq!(MatrixExpander::permutations(&matrix), 0);
        assert!(MatrixExpander::expand(&matrix).is_empty());

        let matrix: Matrix = [("redis", vec![]), ("go", vec!["1.8", "1.9"])]
            .into_iter()
            .collect();
        assert!(MatrixExpander::expand(&matrix).is_empty());

        // An empty list in the middle does not reset the product
        let matrix: Matrix = [
            ("a", vec!["1", "2"]),
            ("b", vec![]),
            ("c", vec!["x", "y", "z"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(MatrixExpander::permutations(&matrix), 0);
        assert!(MatrixExpander::expand(&matrix).is_empty());
    }

    #[test]
    fn test_duplicate_values_are_kept() {
        let matrix: Matrix = [("go", vec!["1.8", "1.8"])].into_iter().collect();
        let axes = MatrixExpander::expand(&matrix);
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[0], axes[1]);
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let matrix = uniform_matrix(3, 3);
        let first = MatrixExpander::expand(&matrix);
        let second = MatrixExpander::expand(&matrix);
        assert_eq!(first, second);

        let first: Vec<_> = first.iter().map(|a| a.to_string()).collect();
        let second: Vec<_> = second.iter().map(|a| a.to_string()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_limits() {
        let expander = MatrixExpander::with_limits(MatrixLimits { tags: 1, axes: 2 });
        let matrix = uniform_matrix(4, 2);

        let axes = expander.expand_matrix(&matrix);
        assert_eq!(axes.len(), 3);
        assert!(axes.iter().all(|a| a.len() == 2));
        assert_eq!(expander.axis_count(&matrix), 3);
    }

    #[test]
    fn test_permutations_saturate() {
        let matrix = uniform_matrix(64, 4);
        assert_eq!(MatrixExpander::permutations(&matrix), usize::MAX);
        assert_eq!(MatrixExpander::expand(&matrix).len(), 26);
    }

    #[test]
    fn test_default_limits() {
        let limits = MatrixLimits::default();
        assert_eq!(limits.tags, LIMIT_TAGS);
        assert_eq!(limits.axes, LIMIT_AXIS);
        assert_eq!(limits.max_tags(), 11);
        assert_eq!(limits.max_axes(), 26);
    }
}
