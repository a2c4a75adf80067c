use time::{Date, Duration};

use crate::dates::format_iso_date;
use crate::domain::is_production_master_data;

const BASE_HEADER: &str = "Tanggal Input (YYYY-MM-DD),Cabang/Dept,Jenis Pekerjaan,Status,Dateline (YYYY-MM-DD)";
const ACTIVATION_HEADER: &str = "Tanggal Aktifasi (YYYY-MM-DD)";

/// Downloadable import template for one menu entry: a header row and one
/// example row with the same columns the importer expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportTemplate {
    pub file_name: String,
    pub contents: String,
}

impl ImportTemplate {
    pub fn for_category(category: &str, sub_category: &str, today: Date) -> Self {
        let today_str = format_iso_date(today);
        let next_week = format_iso_date(today + Duration::days(7));

        let (header, example) = if is_production_master_data(category) {
            (
                format!("{BASE_HEADER},{ACTIVATION_HEADER}"),
                format!("{today_str},Jakarta,Input Master Vendor,Pending,{next_week},{today_str}"),
            )
        } else {
            (
                BASE_HEADER.to_string(),
                format!("{today_str},Bandung,Update Routing,In Progress,{next_week}"),
            )
        };

        Self {
            file_name: format!("Template_{category}_{sub_category}.csv"),
            contents: format!("{header}\n{example}"),
        }
    }
}
