use anyhow::Result;
use colored::Colorize;
use std::io::BufRead;
use std::path::Path;

use crate::patch::{self, PARSER_CALL_TOKEN, PARSER_HEADER_TOKEN, PARSER_SOURCE_TOKEN};
use crate::paths::RepoPaths;
use crate::prompt;
use crate::report;
use crate::scan::{self, ExtClass};

/// Run the whole wiring flow: resolve the repository, scan for candidates,
/// confirm the three choices with the operator, patch both templates, and
/// print the summary.
///
/// `tool_path` is the binary's own location (`<repo>/tools/autowire` in a
/// normal install); `input` is the operator's line stream. Both are passed
/// in so the flow can be driven end to end from tests.
pub fn run(tool_path: &Path, input: &mut impl BufRead) -> Result<()> {
    let repo = RepoPaths::resolve(tool_path)?;

    println!(
        "{} {}",
        "Autowire".cyan().bold(),
        "wiring a native parser into the Android build".dimmed()
    );
    println!("  repo: {}", repo.root.display());

    // Advisory scans; a failed listing just means no detected defaults.
    let sources = scan::scan_candidates(&repo.root, ExtClass::Source);
    let headers = scan::scan_candidates(&repo.root, ExtClass::Header);

    let source_default = scan::default_candidate(&sources, ExtClass::Source);
    let header_default = scan::default_candidate(&headers, ExtClass::Header);

    let source = prompt::prompt_path("Parser source file", &source_default, input)?;
    let header = prompt::prompt_path("Parser header file", &header_default, input)?;
    let mode = prompt::prompt_call_mode(input)?;

    // Build descriptor first, then bridge. No cross-file rollback: if the
    // bridge patch fails, the descriptor keeps its substitutions.
    patch::patch_file(
        &repo.build_descriptor,
        &[(PARSER_SOURCE_TOKEN, source.as_str())],
    )?;
    patch::patch_file(
        &repo.bridge_source,
        &[
            (PARSER_HEADER_TOKEN, header.as_str()),
            (PARSER_CALL_TOKEN, mode.expression()),
        ],
    )?;

    report::summary(&repo, &source, &header, mode);

    Ok(())
}
