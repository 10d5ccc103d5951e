use super::{pattern::checked_size, Pattern};
use anyhow::{anyhow, bail, ensure, Context, Result};

/// Parses a pattern in RLE format.
///
/// Only the standard B3/S23 rule is accepted; a missing rule means B3/S23.
pub fn parse_rle(data: &[u8]) -> Result<Pattern> {
    let text = std::str::from_utf8(data).context("RLE data is not valid UTF-8")?;
    // skipping comment lines
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let header = lines
        .next()
        .ok_or_else(|| anyhow!("RLE data has no header line"))?;
    let (width, height) = parse_header(header)?;

    let mut cells = vec![false; checked_size(width, height)?];
    // run-length encoded pattern data
    let (mut x, mut y, mut cnt) = (0usize, 0usize, None::<usize>);
    let mut finished = false;
    'body: for line in lines {
        for symbol in line.chars() {
            match symbol {
                '0'..='9' => {
                    let digit = symbol as usize - '0' as usize;
                    let value = cnt
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or_else(|| anyhow!("Run count is too large"))?;
                    cnt = Some(value);
                }
                'b' | 'o' => {
                    let run = cnt.take().unwrap_or(1);
                    let end = x
                        .checked_add(run)
                        .filter(|&end| end <= width && y < height)
                        .ok_or_else(|| {
                            anyhow!("Row {} does not fit into the {}x{} header", y, width, height)
                        })?;
                    if symbol == 'o' {
                        cells[y * width + x..y * width + end].fill(true);
                    }
                    x = end;
                }
                '$' => {
                    y = y.saturating_add(cnt.take().unwrap_or(1));
                    x = 0;
                }
                '!' => {
                    finished = true;
                    break 'body;
                }
                c if c.is_whitespace() => {}
                c => bail!("Unexpected symbol {:?} in RLE data", c),
            }
        }
    }
    ensure!(finished, "RLE data is missing the terminating '!'");
    Pattern::from_cells(width, height, cells)
}

/// Parses `x = W, y = H[, rule = R]`.
fn parse_header(line: &str) -> Result<(usize, usize)> {
    let (mut width, mut height) = (None, None);
    for item in line.split(',') {
        let (key, value) = item
            .split_once('=')
            .ok_or_else(|| anyhow!("Malformed RLE header entry {:?}", item.trim()))?;
        let (key, value) = (key.trim(), value.trim());
        match key {
            "x" => width = Some(value.parse::<usize>().context("Invalid pattern width")?),
            "y" => height = Some(value.parse::<usize>().context("Invalid pattern height")?),
            "rule" => {
                let rule = value.to_ascii_uppercase();
                ensure!(
                    rule == "B3/S23" || rule == "23/3",
                    "Unsupported rule {:?}, only B3/S23 is implemented",
                    value
                );
            }
            _ => bail!("Unknown RLE header key {:?}", key),
        }
    }
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Ok((w, h)),
        (Some(_), Some(_)) => bail!("Pattern dimensions must be positive"),
        _ => bail!("RLE header must define both x and y"),
    }
}
