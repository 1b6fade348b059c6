use crate::config::config::SizeUnits;
use crate::models::report::ReportInput;
use crate::models::scan::ExtensionStat;
use crate::service::traits::i_service::ReportServiceTrait;

const MIB: f64 = (1u64 << 20) as f64;
const GIB: f64 = (1u64 << 30) as f64;
const MB: f64 = 1_000_000.0;
const GB: f64 = 1_000_000_000.0;

#[derive(Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        ReportService
    }
}

impl SizeUnits {
    fn gigabyte_threshold(self) -> u64 {
        match self {
            SizeUnits::Mixed | SizeUnits::Decimal => 1_000_000_000,
            SizeUnits::Binary => 1 << 30,
        }
    }

    fn megabyte(self) -> f64 {
        match self {
            SizeUnits::Mixed | SizeUnits::Binary => MIB,
            SizeUnits::Decimal => MB,
        }
    }

    fn gigabyte(self) -> f64 {
        match self {
            SizeUnits::Mixed | SizeUnits::Binary => GIB,
            SizeUnits::Decimal => GB,
        }
    }
}

pub fn to_megabytes(size: u64, units: SizeUnits) -> f64 {
    size as f64 / units.megabyte()
}

pub fn format_total_size(total_size: u64, units: SizeUnits) -> String {
    if total_size < units.gigabyte_threshold() {
        format!("{:.2} MB", to_megabytes(total_size, units))
    } else {
        format!("{:.2} GB", total_size as f64 / units.gigabyte())
    }
}

pub fn format_extension_line(extension: &str, stat: &ExtensionStat, units: SizeUnits) -> String {
    format!(
        "{}: {} файлов, {:.2} MB",
        extension,
        stat.count,
        to_megabytes(stat.size, units)
    )
}

impl ReportServiceTrait for ReportService {
    fn render(&self, input: ReportInput) -> String {
        let mut report = format!(
            "\nРезультаты сканирования:\nОбщий размер файлов с выбранными расширениями: {}\n\nСтатистика по расширениям:\n",
            format_total_size(input.total_size, input.units)
        );
        for (extension, stat) in &input.stats {
            report.push_str(&format_extension_line(extension, stat, input.units));
            report.push('\n');
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn mixed_units_keep_decimal_threshold() {
        // порог десятичный, а значения двоичные
        assert_eq!(format_total_size(999_999_999, SizeUnits::Mixed), "953.67 MB");
        assert_eq!(format_total_size(1_000_000_000, SizeUnits::Mixed), "0.93 GB");
        assert_eq!(format_total_size(12 << 20, SizeUnits::Mixed), "12.00 MB");
    }

    #[test]
    fn binary_units_switch_at_gibibyte() {
        assert_eq!(format_total_size(1_000_000_000, SizeUnits::Binary), "953.67 MB");
        assert_eq!(format_total_size(1 << 30, SizeUnits::Binary), "1.00 GB");
        assert_eq!(format_total_size(3 << 30, SizeUnits::Binary), "3.00 GB");
    }

    #[test]
    fn decimal_units_are_consistent() {
        assert_eq!(format_total_size(2_500_000, SizeUnits::Decimal), "2.50 MB");
        assert_eq!(format_total_size(1_500_000_000, SizeUnits::Decimal), "1.50 GB");
    }

    #[test]
    fn zero_total_is_megabytes() {
        assert_eq!(format_total_size(0, SizeUnits::Mixed), "0.00 MB");
    }

    #[test]
    fn render_lists_every_extension() {
        let mut stats = BTreeMap::new();
        stats.insert(".pdf".to_string(), ExtensionStat { count: 1, size: 10 << 20 });
        stats.insert(".jpg".to_string(), ExtensionStat { count: 1, size: 2 << 20 });

        let report = ReportService::new().render(ReportInput {
            total_size: 12 << 20,
            stats,
            units: SizeUnits::Mixed,
        });

        assert!(report.contains("Общий размер файлов с выбранными расширениями: 12.00 MB"));
        assert!(report.contains(".pdf: 1 файлов, 10.00 MB"));
        assert!(report.contains(".jpg: 1 файлов, 2.00 MB"));
        assert!(report.find(".jpg").unwrap() < report.find(".pdf").unwrap());
    }

    #[test]
    fn render_layout_is_exact() {
        let mut stats = BTreeMap::new();
        stats.insert(".mp3".to_string(), ExtensionStat { count: 2, size: 3 << 20 });

        let report = ReportService::new().render(ReportInput {
            total_size: 3 << 20,
            stats,
            units: SizeUnits::Mixed,
        });

        assert_eq!(
            report,
            "\nРезультаты сканирования:\n\
             Общий размер файлов с выбранными расширениями: 3.00 MB\n\
             \nСтатистика по расширениям:\n\
             .mp3: 2 файлов, 3.00 MB\n"
        );
    }
}
