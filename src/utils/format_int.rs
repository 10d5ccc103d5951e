use std::fmt;

/// Counter shown in the stats panel, printed with `'` between thousands
/// (`4'800`) so large generation numbers stay readable.
pub struct NiceInt(u64);

impl NiceInt {
    pub fn from(value: u64) -> Self {
        Self(value)
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u64)
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let lead = match digits.len() % 3 {
            0 => 3,
            n => n,
        };
        f.write_str(&digits[..lead])?;
        for group in digits.as_bytes()[lead..].chunks(3) {
            // digits are ASCII
            write!(f, "'{}", std::str::from_utf8(group).map_err(|_| fmt::Error)?)?;
        }
        Ok(())
    }
}
