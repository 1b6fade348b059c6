use crate::config::ports::AppConfig;
use crate::models::copy::CopyOutput;
use crate::models::scan::ScanOutput;

#[derive(Debug)]
pub struct BackupOutput {
    pub config: AppConfig,
    pub scan: ScanOutput,
    pub report: String,
    pub copy: Option<CopyOutput>,
}
