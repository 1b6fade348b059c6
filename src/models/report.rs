use std::collections::BTreeMap;
use crate::config::config::SizeUnits;
use crate::models::scan::ExtensionStat;

#[derive(Clone, Debug)]
pub struct ReportInput {
    pub total_size: u64,
    pub stats: BTreeMap<String, ExtensionStat>,
    pub units: SizeUnits,
}
