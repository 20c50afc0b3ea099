use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use public_info_query::datasets::{
    ProjectFilter, ProjectRecord, ProjectSortKey, SalaryFilter, SalaryRecord, SalarySortKey,
};
use public_info_query::processing::SortDirection;
use public_info_query::query::{query_projects, query_salaries};
use public_info_query::types::PageRequest;

const ROWS: usize = 10_000;

const PROVINCES: &[&str] = &["Córdoba", "Buenos Aires", "Neuquén", "Salta", "Entre Ríos"];
const SECTIONS: &[&str] = &["Ministerio de Economía", "Secretaría de Salud", "Educación"];

fn salaries() -> Vec<SalaryRecord> {
    (0..ROWS)
        .map(|i| SalaryRecord {
            first_name: format!("Nombre{i}"),
            last_name: format!("Apellido{}", ROWS - i),
            monthly_wage: format!("{}.{:02}", 90_000 + (i * 37) % 150_000, i % 100),
            month_num: (i % 12 + 1).to_string(),
            month: "Mes".to_string(),
            year: (2015 + i % 10).to_string(),
            position: "Analista".to_string(),
            section: SECTIONS[i % SECTIONS.len()].to_string(),
            document_number: (20_000_000 + i).to_string(),
        })
        .collect()
}

fn projects() -> Vec<ProjectRecord> {
    (0..ROWS)
        .map(|i| ProjectRecord {
            project_name: format!("Obra {i}"),
            total_amount: format!("{}.50", 100_000 + (i * 7_919) % 5_000_000),
            province: PROVINCES[i % PROVINCES.len()].to_string(),
            department: format!("Depto {}", i % 40),
            description: if i % 3 == 0 {
                "Construcción de escuela".to_string()
            } else {
                "Pavimentación urbana".to_string()
            },
            start_year: (2010 + i % 12).to_string(),
            end_year: (2012 + i % 12).to_string(),
            ..Default::default()
        })
        .collect()
}

fn bench_salaries(c: &mut Criterion) {
    let records = salaries();
    let unfiltered = SalaryFilter::default();
    let filtered = SalaryFilter {
        section: Some("economia".to_string()),
        min_monthly_wage: Some(rust_decimal::Decimal::new(120_000, 0)),
        ..Default::default()
    };
    let request = PageRequest::new(3, 50, SalarySortKey::Name, SortDirection::Asc);

    c.bench_function("salaries/unfiltered_by_name", |b| {
        b.iter(|| query_salaries(black_box(&records), &unfiltered, &request))
    });
    c.bench_function("salaries/section_and_wage", |b| {
        b.iter(|| query_salaries(black_box(&records), &filtered, &request))
    });
}

fn bench_projects(c: &mut Criterion) {
    let records = projects();
    let filtered = ProjectFilter {
        province: Some("cordoba".to_string()),
        description: Some("escuela".to_string()),
        ..Default::default()
    };
    let request = PageRequest::new(1, 25, ProjectSortKey::TotalAmount, SortDirection::Desc);

    c.bench_function("projects/province_and_description", |b| {
        b.iter(|| query_projects(black_box(&records), &filtered, &request))
    });
}

criterion_group!(benches, bench_salaries, bench_projects);
criterion_main!(benches);
