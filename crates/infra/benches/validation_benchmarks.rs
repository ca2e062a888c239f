use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockgate_core::{CompanyId, RuleId, WarehouseId};
use stockgate_infra::{ItemRecord, RuleStore, StockRulesHost};
use stockgate_rules::{DocumentRow, DocumentType, Rule, TransactionDocument};

const WAREHOUSES: usize = 20;
const GROUPS: usize = 10;

fn setup_host() -> StockRulesHost {
    let host = StockRulesHost::new();
    host.after_install(true);

    for i in 0..500 {
        host.items().upsert(ItemRecord {
            item_code: format!("ITEM-{i}").into(),
            item_group: Some(format!("GROUP-{}", i % GROUPS).into()),
        });
    }

    // Half the warehouses are restricted to the even groups.
    for w in (0..WAREHOUSES).step_by(2) {
        let mut rule = Rule::new(
            RuleId::from(format!("WIGR-{w}")),
            WarehouseId::from(format!("WH-{w}")),
            CompanyId::from("C1"),
        );
        for g in (0..GROUPS).step_by(2) {
            rule.add_allowed_group(format!("GROUP-{g}"));
        }
        host.rules().save(rule).expect("seed rule");
    }

    host
}

fn stock_entry(rows: usize) -> TransactionDocument {
    let mut doc = TransactionDocument::new(DocumentType::StockEntry, "C1");
    for i in 0..rows {
        doc = doc.with_row(DocumentRow::transfer(
            format!("ITEM-{}", i % 500),
            Some(WarehouseId::from(format!("WH-{}", i % WAREHOUSES))),
            Some(WarehouseId::from(format!("WH-{}", (i + 1) % WAREHOUSES))),
        ));
    }
    doc
}

fn bench_validate(c: &mut Criterion) {
    let host = setup_host();
    let mut group = c.benchmark_group("validate_stock_entry");

    for rows in [10usize, 100, 1_000] {
        let doc = stock_entry(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &doc, |b, doc| {
            b.iter(|| black_box(host.before_submit(black_box(doc)).is_err()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
