use pyreport_core::latex::format_to_latex;
use std::path::Path;

/// Print the LaTeX formatting of `text`.
pub fn run(config: Option<&Path>, verbosity: i16, text: &str) {
    let _cfg = super::load_config(config, verbosity);
    println!("{}", format_to_latex(text));
}
