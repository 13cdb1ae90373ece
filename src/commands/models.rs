use crate::output::{GroupOrder, ReportFormat, ReportOptions};
use crate::parser::GrammarOptions;
use std::path::PathBuf;

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct SummarizeArgs {
    /// Dump file to read (`None` or `-` reads stdin)
    pub input: Option<PathBuf>,

    /// Skip groups with fewer goroutines than this
    pub min_count: usize,

    /// Print the parse failure count after the report
    pub print_errors: bool,

    pub format: ReportFormat,
    pub order: GroupOrder,

    /// Accepted dump grammar variant
    pub grammar: GrammarOptions,
}

impl SummarizeArgs {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            min_count: self.min_count,
            print_errors: self.print_errors,
            order: self.order,
        }
    }
}
