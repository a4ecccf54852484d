//! Fixed textual layout for a run report.
use std::io::{self, Write};

use vecspan_linalg::{RunReport, Vector};

pub const SEPARATOR: &str = "----------------";

/// `[(1, 2), (3, 4)]`
pub fn format_vectors(vectors: &[Vector]) -> String {
    let parts: Vec<String> = vectors.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

pub fn write_report<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(out, "VECTORS: {}", format_vectors(&report.vectors))?;
    writeln!(out, "{}", SEPARATOR)?;

    writeln!(out, "MATRIX:")?;
    writeln!(out, "{}", report.matrix)?;
    writeln!(out, "{}", SEPARATOR)?;

    writeln!(out, "RREF:")?;
    writeln!(out, "{}", report.rref)?;
    writeln!(out, "{}", SEPARATOR)?;

    writeln!(out, "Subspace dimension (d) = {}", report.dimension)?;
    writeln!(out, "{}", SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use vecspan_linalg::builder::vector;
    use vecspan_linalg::{run_once, RunConfig};

    #[test]
    fn vectors_use_tuple_notation() {
        let v = vec![vector(&[1, 2]), vector(&[-3, 0])];
        assert_eq!(format_vectors(&v), "[(1, 2), (-3, 0)]");
    }

    #[test]
    fn report_blocks_in_order() {
        let report =
            run_once(&RunConfig::new(2, 3, 1, 2), &mut StdRng::seed_from_u64(3)).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let expected = "\
VECTORS: [(1, 1), (1, 1), (1, 1)]
----------------
MATRIX:
1, 1, 1
1, 1, 1
----------------
RREF:
1, 1, 1
0, 0, 0
----------------
Subspace dimension (d) = 1
----------------
";
        assert_eq!(text, expected);
    }
}
