//! Line-oriented prompting over any reader/writer pair.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub const BANNER: &str = "
Variables:
    - n: number of dimensions on our vectors (n = 3 might produce (3, 2, -1) as a vector)
    - r: total number of vectors
    - c: range from which to randomly generate vector coordinates
    - d: dimension of the vector subspace of our vectors
We will be able to use this program to look at the relationship between n, r, c and d.
";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write to console")
    }

    /// Read one line after printing `prompt`. `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write to console")?;
        self.output.flush().context("Failed to flush console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until an integer is entered. `None` on end of input.
    pub fn prompt_int(&mut self, label: &str) -> Result<Option<i64>> {
        let prompt = format!("Enter an integer value for {}: ", label);
        loop {
            let Some(reply) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match reply.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    log::debug!("rejected non-integer input {:?}", reply);
                    self.say("Invalid number. Try again.")?;
                }
            }
        }
    }

    /// Only an exact `y` counts as yes; end of input counts as no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)?.as_deref() == Some("y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_int_retries_until_integer() {
        let mut c = console("abc\n4.5\n -7 \n");
        assert_eq!(c.prompt_int("n").unwrap(), Some(-7));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("Invalid number. Try again.").count(), 2);
        assert!(out.starts_with("Enter an integer value for n: "));
    }

    #[test]
    fn prompt_int_stops_at_eof() {
        let mut c = console("nope\n");
        assert_eq!(c.prompt_int("r").unwrap(), None);
    }

    #[test]
    fn confirm_only_accepts_y() {
        assert!(console("y\n").confirm("again? ").unwrap());
        assert!(!console("yes\n").confirm("again? ").unwrap());
        assert!(!console("Y\n").confirm("again? ").unwrap());
        assert!(!console("").confirm("again? ").unwrap());
    }
}
