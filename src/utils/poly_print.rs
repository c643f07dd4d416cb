//! Printing and visualization utilities.
//!
//! Renders polyhedra in set notation, domain matrices in the code
//! generator's textual format (annotated with the constraint each row
//! encodes), and small 2D domains as ASCII grids.

use crate::bridge::matrix::DomainMatrix;
use crate::bridge::row::row_to_constraint;
use crate::polyhedral::polyhedron::Polyhedron;
use num_bigint::BigInt;
use std::fmt::Write;

/// Pretty printer for polyhedral objects.
pub struct PolyPrinter {
    /// Dimension names, `d<i>` when missing
    names: Vec<String>,
    /// Output buffer
    buffer: String,
}

impl PolyPrinter {
    /// Create a new printer.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Use `names` for the leading dimensions.
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    /// Get the output.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Take the output.
    pub fn take_output(self) -> String {
        self.buffer
    }

    fn names_for(&self, dim: usize) -> Vec<String> {
        (0..dim)
            .map(|i| self.names.get(i).cloned().unwrap_or_else(|| format!("d{}", i)))
            .collect()
    }

    /// Print a polyhedron: `{ [i, j] : constraints }`.
    pub fn print_polyhedron(&mut self, ph: &Polyhedron) {
        let names = self.names_for(ph.space_dimension());
        self.buffer.push_str("{ [");
        self.buffer.push_str(&names.join(", "));
        self.buffer.push_str("] : ");

        let constraints: Vec<String> = ph
            .constraints()
            .iter()
            .map(|c| c.to_string_with_names(&names))
            .collect();
        if constraints.is_empty() {
            self.buffer.push_str("true");
        } else {
            self.buffer.push_str(&constraints.join(" and "));
        }
        self.buffer.push_str(" }");
    }

    /// Print a matrix in textual form, one commented constraint per row.
    pub fn print_matrix(&mut self, matrix: &DomainMatrix) {
        let names = self.names_for(matrix.dimension());
        writeln!(self.buffer, "{} {}", matrix.nrows(), matrix.ncols()).unwrap();
        for (i, row) in matrix.rows().enumerate() {
            let cells: Vec<String> = row.iter().map(|v| format!("{:>3}", v)).collect();
            self.buffer.push_str(&cells.join(" "));
            if let Ok(c) = row_to_constraint(matrix, i) {
                write!(self.buffer, "    # {}", c.to_string_with_names(&names)).unwrap();
            }
            self.buffer.push('\n');
        }
    }

    /// Print enumerated points, one tuple per line.
    pub fn print_points(&mut self, points: &[Vec<i64>]) {
        for p in points {
            let coords: Vec<String> = p.iter().map(i64::to_string).collect();
            writeln!(self.buffer, "({})", coords.join(", ")).unwrap();
        }
    }
}

impl Default for PolyPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Print a polyhedron to a string.
pub fn print_polyhedron(ph: &Polyhedron) -> String {
    let mut printer = PolyPrinter::new();
    printer.print_polyhedron(ph);
    printer.take_output()
}

/// Print a matrix to a string.
pub fn print_matrix(matrix: &DomainMatrix) -> String {
    let mut printer = PolyPrinter::new();
    printer.print_matrix(matrix);
    printer.take_output()
}

/// Generate a 2D ASCII visualization of the first two dimensions.
///
/// Remaining dimensions are fixed at zero. `x` runs along dimension 0 and
/// `y` along dimension 1.
pub fn visualize_2d(ph: &Polyhedron, x_range: (i64, i64), y_range: (i64, i64)) -> String {
    if ph.space_dimension() < 2 {
        return "Domain has less than 2 dimensions".to_string();
    }

    let mut output = String::new();
    let (x_min, x_max) = x_range;
    let (y_min, y_max) = y_range;

    output.push_str("    ");
    for x in x_min..=x_max {
        write!(output, "{:3}", x).unwrap();
    }
    output.push('\n');

    for y in (y_min..=y_max).rev() {
        write!(output, "{:3} ", y).unwrap();
        for x in x_min..=x_max {
            let mut point = vec![BigInt::from(x), BigInt::from(y)];
            point.resize(ph.space_dimension(), BigInt::from(0));
            if ph.contains(&point).unwrap_or(false) {
                output.push_str(" * ");
            } else {
                output.push_str(" . ");
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyhedral::constraint::Constraint;

    fn strip() -> Polyhedron {
        // 0 <= i <= 4
        let mut ph = Polyhedron::universe(1);
        ph.add_constraint(Constraint::lower_bound(0, 0, 1)).unwrap();
        ph.add_constraint(Constraint::upper_bound(0, 4, 1)).unwrap();
        ph
    }

    #[test]
    fn test_print_polyhedron() {
        let mut printer = PolyPrinter::new().with_names(vec!["i".to_string()]);
        printer.print_polyhedron(&strip());
        assert_eq!(printer.output(), "{ [i] : i >= 0 and -i + 4 >= 0 }");
    }

    #[test]
    fn test_print_universe() {
        assert_eq!(print_polyhedron(&Polyhedron::universe(2)), "{ [d0, d1] : true }");
    }

    #[test]
    fn test_print_matrix() {
        let m = DomainMatrix::from_rows(vec![vec![1, -1, 4]], 3).unwrap();
        let out = print_matrix(&m);
        assert!(out.starts_with("1 3\n"));
        assert!(out.contains("# -d0 + 4 >= 0"));
        // Comments do not get in the way of parsing the output back.
        assert_eq!(out.parse::<DomainMatrix>().unwrap(), m);
    }

    #[test]
    fn test_print_points() {
        let mut printer = PolyPrinter::new();
        printer.print_points(&[vec![0, 1], vec![2, 3]]);
        assert_eq!(printer.output(), "(0, 1)\n(2, 3)\n");
    }

    #[test]
    fn test_visualize_2d() {
        let mut ph = Polyhedron::universe(2);
        for d in 0..2 {
            ph.add_constraint(Constraint::lower_bound(d, 0, 2)).unwrap();
            ph.add_constraint(Constraint::upper_bound(d, 2, 2)).unwrap();
        }
        let output = visualize_2d(&ph, (0, 4), (0, 4));
        assert!(output.contains('*'));
        assert!(output.contains('.'));
        assert_eq!(visualize_2d(&strip(), (0, 1), (0, 1)), "Domain has less than 2 dimensions");
    }
}
