use criterion::{criterion_group, criterion_main, Criterion, black_box};

use coronav::{Report, specs::countries};

const TABLE_ID: &str = "main_table_countries_today";
const URL: &str = "https://www.worldometers.info/coronavirus/";

/// A page shaped like the live one, ~230 countries.
fn synthetic_page(n: usize) -> String {
    let mut body = String::with_capacity(n * 400);
    for i in 0..n {
        let deaths = i % 17;
        body.push_str(&format!(
            "<tr><td><a class=\"mt_a\" href=\"country/c{i}/\">Country {i}</a></td>\
             <td>{cases}</td><td>+{new}</td><td>{deaths}</td><td></td>\
             <td>{rec}</td><td>{act}</td><td>{ser}</td><td>{cpm}.5</td><td>{dpm}.1</td></tr>\n",
            cases = format_thousands(1_000 + i * 7_919),
            new = i % 300,
            rec = format_thousands(i * 5_000),
            act = format_thousands(i * 311),
            ser = i % 90,
            cpm = i * 13,
            dpm = i % 40,
        ));
    }
    format!(
        "<html><body><table id=\"{TABLE_ID}\"><thead><tr><th>Country</th></tr></thead>\
         <tbody>{body}</tbody></table></body></html>"
    )
}

fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn bench_ranking(c: &mut Criterion) {
    let doc = synthetic_page(230);

    c.bench_function("extract_rows", |b| {
        b.iter(|| {
            let rows = countries::extract_rows(black_box(&doc), TABLE_ID).unwrap();
            black_box(rows.len())
        })
    });

    let rows = countries::extract_rows(&doc, TABLE_ID).unwrap();
    c.bench_function("rank_and_render", |b| {
        b.iter(|| {
            let report = Report::rank(black_box(rows.clone()), URL);
            black_box(report.render().len())
        })
    });
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
