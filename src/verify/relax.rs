//! Function-size comparator
//!
//! Cross-checks the function sizes the tool's relaxer reports against the
//! sizes the symbol-table dump of the assembled object reports. Every
//! function in the symbol dump must appear in the tool's report with the
//! same size; functions only the tool reports are never checked.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::common::Result;
use crate::process;

/// Executables the function-size comparator drives
#[derive(Debug)]
pub struct RelaxTools {
    pub tool: PathBuf,
    pub assembler: PathBuf,
    pub symbol_dumper: PathBuf,
}

/// Function name → reported size, compared as integers at the end
pub type FunctionSizeMap = BTreeMap<String, String>;

/// Run the tool in statistics mode and collect its reported sizes
///
/// The transformed output goes to a null sink; only the relaxation
/// statistics on stdout matter. A nonzero tool exit aborts.
pub async fn tool_sizes(tools: &RelaxTools, input: &Path) -> Result<FunctionSizeMap> {
    let command = vec![
        tools.tool.display().to_string(),
        "--mao=ASM=o[/dev/null]".to_string(),
        "--mao=TEST=relax[1],cfg[0],lsg[0]".to_string(),
        "--mao=RELAX=stat[1]".to_string(),
        input.display().to_string(),
    ];
    let result = process::run_checked(&command).await?;
    Ok(parse_tool_sizes(&result.stdout))
}

/// Parse `MaoRelax functionsize <name> <size>` lines
///
/// First occurrence per name wins; later duplicates are ignored.
pub fn parse_tool_sizes(output: &str) -> FunctionSizeMap {
    let mut sizes = FunctionSizeMap::new();
    for line in output.lines() {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() == 4 && words[0] == "MaoRelax" && words[1] == "functionsize" {
            sizes
                .entry(words[2].to_string())
                .or_insert_with(|| words[3].to_string());
        }
    }
    sizes
}

/// Assemble the input and collect function sizes from the symbol dump
///
/// The single temporary object file is removed once extraction finishes.
pub async fn dump_sizes(tools: &RelaxTools, input: &Path) -> Result<FunctionSizeMap> {
    let object = tempfile::Builder::new().suffix(".o").tempfile()?;

    let as_cmd = vec![
        tools.assembler.display().to_string(),
        "-o".to_string(),
        object.path().display().to_string(),
        input.display().to_string(),
    ];
    process::run_checked(&as_cmd).await?;

    let dump_cmd = vec![
        tools.symbol_dumper.display().to_string(),
        "--wide".to_string(),
        "-s".to_string(),
        object.path().display().to_string(),
    ];
    let result = process::run_checked(&dump_cmd).await?;
    Ok(parse_dump_sizes(&result.stdout))
}

fn func_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+ FUNC +").unwrap())
}

/// Parse `<size> FUNC ...` symbol lines at fixed token positions
pub fn parse_dump_sizes(output: &str) -> FunctionSizeMap {
    let mut sizes = FunctionSizeMap::new();
    for line in output.lines() {
        if !func_marker().is_match(line) {
            continue;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() > 7 {
            sizes.insert(words[7].to_string(), words[2].to_string());
        }
    }
    sizes
}

/// Compare the two maps, keyed by the symbol dump
///
/// Returns whether every function checked out, plus the report lines in
/// symbol-dump order. CORRECT lines appear only when `verbose` is set;
/// error lines always do.
pub fn compare_sizes(
    tool_map: &FunctionSizeMap,
    dump_map: &FunctionSizeMap,
    verbose: bool,
) -> (bool, Vec<String>) {
    let mut ok = true;
    let mut lines = Vec::new();

    for (name, dump_size) in dump_map {
        match tool_map.get(name) {
            None => {
                lines.push(format!("ERROR {name:<60} Unable to find function in MAO."));
                ok = false;
            }
            Some(tool_size) => match (dump_size.parse::<u64>(), tool_size.parse::<u64>()) {
                (Ok(dump), Ok(tool)) if dump == tool => {
                    if verbose {
                        lines.push(format!("CORRECT {name:<60} {dump:5}"));
                    }
                }
                (Ok(dump), Ok(tool)) => {
                    lines.push(format!("ERROR {name:<60} {dump:5} {tool:5}"));
                    ok = false;
                }
                _ => {
                    lines.push(format!(
                        "ERROR {name:<60} unparsable sizes '{dump_size}' '{tool_size}'"
                    ));
                    ok = false;
                }
            },
        }
    }
    (ok, lines)
}

/// Run the full function-size verification for one input file
pub async fn verify_relaxation(tools: &RelaxTools, input: &Path, verbose: bool) -> Result<bool> {
    let tool_map = tool_sizes(tools, input).await?;
    let dump_map = dump_sizes(tools, input).await?;

    let (ok, lines) = compare_sizes(&tool_map, &dump_map, verbose);
    for line in lines {
        println!("{line}");
    }
    Ok(ok)
}
