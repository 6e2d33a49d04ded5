use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How the generated bridge invokes the user's decode function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CallMode {
    /// Mode 1 (default): a dedicated helper returning the model id.
    ModelIdHelper,
    /// Mode 2: full decode, then field access.
    FieldAccess,
}

impl CallMode {
    /// The literal call expression substituted into the bridge template.
    pub fn expression(&self) -> &'static str {
        match self {
            CallMode::ModelIdHelper => "DecodeModelId(buf)",
            CallMode::FieldAccess => "Decode(buf).model_id",
        }
    }
}

/// Ask the operator for a path, offering a detected default.
///
/// Non-empty input wins verbatim; empty input accepts the default, even
/// when the default itself is empty (no candidate was detected). The path
/// is not validated here: the operator is trusted.
pub fn prompt_path(label: &str, detected: &str, input: &mut impl BufRead) -> Result<String> {
    println!();
    println!("{}", label.cyan().bold());
    if detected.is_empty() {
        println!("  {}", "(no candidate detected)".dimmed());
    } else {
        println!("  detected: {}", detected.green());
    }
    print!("Path [{}]: ", detected);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let choice = line.trim();
    if choice.is_empty() {
        Ok(detected.to_string())
    } else {
        Ok(choice.to_string())
    }
}

/// Ask the operator which call convention the bridge should use.
///
/// Empty input means mode 1. Anything other than "1" or "2" re-prompts
/// rather than silently picking a mode; end of input falls back to the
/// default.
pub fn prompt_call_mode(input: &mut impl BufRead) -> Result<CallMode> {
    println!();
    println!("{}", "Decode call convention".cyan().bold());
    println!("  1) {}  (default)", CallMode::ModelIdHelper.expression());
    println!("  2) {}", CallMode::FieldAccess.expression());

    loop {
        print!("Choice [1]: ");
        io::stdout().flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;

        match line.trim() {
            "" | "1" => return Ok(CallMode::ModelIdHelper),
            "2" => return Ok(CallMode::FieldAccess),
            other => {
                println!("  {} `{}` is not a choice, enter 1 or 2", "note:".yellow(), other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_empty_input_accepts_default() {
        let mut input = Cursor::new(b"\n".to_vec());
        let choice = prompt_path("Parser source file", "src/continuity_parser.cpp", &mut input).unwrap();
        assert_eq!(choice, "src/continuity_parser.cpp");
    }

    #[test]
    fn test_explicit_input_overrides_default() {
        let mut input = Cursor::new(b"lib/decode.cpp\n".to_vec());
        let choice = prompt_path("Parser source file", "src/continuity_parser.cpp", &mut input).unwrap();
        assert_eq!(choice, "lib/decode.cpp");
    }

    #[test]
    fn test_empty_input_with_empty_default_stays_empty() {
        // No candidate detected and the operator just hits enter: the
        // choice is the empty string, never some fixed fallback literal.
        let mut input = Cursor::new(b"\n".to_vec());
        let choice = prompt_path("Parser header file", "", &mut input).unwrap();
        assert_eq!(choice, "");
    }

    #[test]
    fn test_eof_accepts_default() {
        let mut input = Cursor::new(Vec::new());
        let choice = prompt_path("Parser source file", "src/p.cpp", &mut input).unwrap();
        assert_eq!(choice, "src/p.cpp");
    }

    #[test]
    fn test_call_mode_one() {
        let mut input = Cursor::new(b"1\n".to_vec());
        let mode = prompt_call_mode(&mut input).unwrap();
        assert_eq!(mode, CallMode::ModelIdHelper);
        assert_eq!(mode.expression(), "DecodeModelId(buf)");
    }

    #[test]
    fn test_call_mode_empty_defaults_to_one() {
        let mut input = Cursor::new(b"\n".to_vec());
        assert_eq!(prompt_call_mode(&mut input).unwrap(), CallMode::ModelIdHelper);
    }

    #[test]
    fn test_call_mode_two() {
        let mut input = Cursor::new(b"2\n".to_vec());
        let mode = prompt_call_mode(&mut input).unwrap();
        assert_eq!(mode, CallMode::FieldAccess);
        assert_eq!(mode.expression(), "Decode(buf).model_id");
    }

    #[test]
    fn test_call_mode_invalid_input_reprompts() {
        let mut input = Cursor::new(b"3\nbanana\n2\n".to_vec());
        assert_eq!(prompt_call_mode(&mut input).unwrap(), CallMode::FieldAccess);
    }

    #[test]
    fn test_call_mode_eof_defaults_to_one() {
        let mut input = Cursor::new(Vec::new());
        assert_eq!(prompt_call_mode(&mut input).unwrap(), CallMode::ModelIdHelper);
    }
}
