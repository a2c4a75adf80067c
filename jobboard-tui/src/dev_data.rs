//! Demo records for `jobboard dev`.

use jobboard::dates::format_iso_date;
use jobboard::domain::{Record, Status, PRODUCTION_MASTER_DATA};
use time::{Date, Duration};

struct DemoRecord {
    category: &'static str,
    sub_category: &'static str,
    branch_dept: &'static str,
    job_type: &'static str,
    status: Status,
    /// Days from today; negative is in the past.
    input_offset: i64,
    deadline_offset: i64,
}

const DEMO_RECORDS: &[DemoRecord] = &[
    DemoRecord {
        category: "Penyesuaian",
        sub_category: "Harga Jual",
        branch_dept: "Jakarta Pusat",
        job_type: "Update harga jual reguler",
        status: Status::Completed,
        input_offset: -20,
        deadline_offset: -10,
    },
    DemoRecord {
        category: "Penyesuaian",
        sub_category: "Harga Jual",
        branch_dept: "Bandung",
        job_type: "Penyesuaian tarif kiloan",
        status: Status::InProgress,
        input_offset: -6,
        deadline_offset: 3,
    },
    DemoRecord {
        category: "Penyesuaian",
        sub_category: "Routing",
        branch_dept: "Surabaya",
        job_type: "Routing ulang hub timur",
        status: Status::Pending,
        input_offset: -12,
        deadline_offset: -2,
    },
    DemoRecord {
        category: "Request Data",
        sub_category: "KCU",
        branch_dept: "Medan",
        job_type: "Rekap volume bulanan",
        status: Status::Pending,
        input_offset: -3,
        deadline_offset: 7,
    },
    DemoRecord {
        category: "Request Data",
        sub_category: "Nasional",
        branch_dept: "Divisi Finance",
        job_type: "Data revenue kuartal",
        status: Status::InProgress,
        input_offset: -9,
        deadline_offset: -1,
    },
    DemoRecord {
        category: "Problem",
        sub_category: "SLA",
        branch_dept: "Makassar",
        job_type: "Keterlambatan kiriman",
        status: Status::Pending,
        input_offset: -15,
        deadline_offset: -5,
    },
    DemoRecord {
        category: "Problem",
        sub_category: "Tarif",
        branch_dept: "Semarang",
        job_type: "Selisih tarif sistem",
        status: Status::Completed,
        input_offset: -4,
        deadline_offset: 1,
    },
    DemoRecord {
        category: "Problem",
        sub_category: "Biaya",
        branch_dept: "Denpasar",
        job_type: "Biaya tambahan packing",
        status: Status::Pending,
        input_offset: -1,
        deadline_offset: 14,
    },
    DemoRecord {
        category: PRODUCTION_MASTER_DATA,
        sub_category: "Cabang",
        branch_dept: "Balikpapan",
        job_type: "Aktivasi cabang baru",
        status: Status::InProgress,
        input_offset: -8,
        deadline_offset: 5,
    },
    DemoRecord {
        category: PRODUCTION_MASTER_DATA,
        sub_category: "Nasional",
        branch_dept: "Divisi Operasional",
        job_type: "Master kode layanan",
        status: Status::Pending,
        input_offset: -25,
        deadline_offset: -12,
    },
];

/// Demo records dated relative to `today`, newest input first.
pub fn demo_records(today: Date) -> Vec<Record> {
    let day = |offset: i64| format_iso_date(today + Duration::days(offset));

    let mut records: Vec<Record> = DEMO_RECORDS
        .iter()
        .map(|demo| Record {
            id: Record::new_id(),
            category: demo.category.to_string(),
            sub_category: demo.sub_category.to_string(),
            date_input: day(demo.input_offset),
            branch_dept: demo.branch_dept.to_string(),
            job_type: demo.job_type.to_string(),
            status: demo.status,
            deadline: day(demo.deadline_offset),
            activation_date: (demo.category == PRODUCTION_MASTER_DATA)
                .then(|| day(demo.deadline_offset + 7)),
        })
        .collect();
    records.sort_by(|a, b| b.date_input.cmp(&a.date_input));
    records
}
