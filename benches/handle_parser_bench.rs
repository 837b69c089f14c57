use criterion::{black_box, criterion_group, criterion_main, Criterion};
use social_parse::{
    normalize, parse_facebook_username, parse_instagram_handle, parse_twitter_handle,
};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.bench_function("bare_token", |b| b.iter(|| normalize(black_box("@jerry"))));
    group.bench_function("full_url", |b| {
        b.iter(|| normalize(black_box("https://twitter.com/jerry?ref=somejunk")))
    });
    group.bench_function("url_without_scheme", |b| {
        b.iter(|| normalize(black_box("instagram.com/@chelseahandler")))
    });
    group.finish();
}

fn bench_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("validators");
    group.bench_function("facebook", |b| {
        let page = "https://facebook.com/Joe-Smith-Magician-129875824511529";
        b.iter(|| parse_facebook_username(black_box(page)))
    });
    group.bench_function("instagram", |b| {
        b.iter(|| parse_instagram_handle(black_box("@jerry.seinfeld")))
    });
    group.bench_function("twitter", |b| {
        b.iter(|| parse_twitter_handle(black_box("twitter.com/jerry_seinfeld")))
    });
    group.bench_function("twitter_rejected", |b| {
        b.iter(|| parse_twitter_handle(black_box("ftp://twitter.com/jerry")))
    });
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_validators);
criterion_main!(benches);
