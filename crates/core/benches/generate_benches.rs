use criterion::{black_box, criterion_group, criterion_main, Criterion};

use script_builder_core::{generate, BuilderState, MenuEntry, ScriptDialect};

fn sample_state(dialect: ScriptDialect) -> BuilderState {
    let banner: Vec<String> = (0..40)
        .map(|row| format!("{:=<60}", format!("= banner row {row} ")))
        .collect();
    let menu_entries: Vec<MenuEntry> = (0..20)
        .map(|idx| MenuEntry::new(format!("Option {idx}"), format!("run-task --id {idx}")))
        .collect();

    BuilderState {
        dialect,
        banner_text: banner.join("\n"),
        body_text: "echo \"body\"\n".repeat(50),
        menu_entries,
    }
}

fn bench_generate(c: &mut Criterion) {
    let posix = sample_state(ScriptDialect::Posix);
    c.bench_function("generate_posix", |b| b.iter(|| generate(black_box(&posix))));

    let powershell = sample_state(ScriptDialect::PowerShell);
    c.bench_function("generate_powershell", |b| {
        b.iter(|| generate(black_box(&powershell)))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
