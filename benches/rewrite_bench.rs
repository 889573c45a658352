use criterion::{Criterion, criterion_group, criterion_main};
use loctext_converter::core::catalog::Catalog;
use loctext_converter::core::config::MacroNames;
use loctext_converter::core::rewrite::Rewriter;
use std::hint::black_box;

fn bench_rewrite(c: &mut Criterion) {
    let chinese = Catalog::parse("msgid \"Hello\"\nmsgstr \"你好\"\n");
    let english = Catalog::parse("msgid \"Hello\"\nmsgstr \"Hello there\"\n");
    let rewriter = Rewriter::new(&chinese, &english, &MacroNames::default()).unwrap();

    // A source file with a mix of matching and non-matching lines.
    let source: String = (0..500)
        .map(|i| {
            if i % 2 == 0 {
                format!("    TitleText = LOCTEXT(\"Hello\", \"Hello {}\");\n", i)
            } else {
                format!("    int value_{} = {};\n", i, i)
            }
        })
        .collect();

    c.bench_function("rewrite_source", |b| {
        b.iter(|| rewriter.rewrite(black_box(&source)));
    });

    let catalog_content: String = (0..500)
        .map(|i| format!("msgid \"Key{}\"\nmsgstr \"值{}\"\n\n", i, i))
        .collect();

    c.bench_function("parse_catalog", |b| {
        b.iter(|| Catalog::parse(black_box(&catalog_content)));
    });
}

criterion_group!(benches, bench_rewrite);
criterion_main!(benches);
