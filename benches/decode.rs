use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ttfont_bin::formats::{fnt, ft2, RawContainer};
use ttfont_testing::fnt::FntFixture;
use ttfont_testing::ft2::Ft2Fixture;

/// A font with a glyph and unicode entry for every printable ASCII character
fn ascii_fixtures() -> (Vec<u8>, Vec<u8>) {
    let mut fnt_fixture = FntFixture::new().with_image(&[0u8; 64 * 1024]);
    let mut ft2_fixture = Ft2Fixture::new().with_image(&[0u8; 64 * 1024]);

    for (index, ch) in (0x20u16..0x7f).enumerate() {
        let x = (index % 16) as f32 * 16.0;
        let y = (index / 16) as f32 * 16.0;
        fnt_fixture = fnt_fixture.with_glyph(x, y, 12.0).with_entry(ch, index as u16);
        ft2_fixture = ft2_fixture
            .with_glyph(x, y, 12.0)
            .with_entry(ch, index as u16)
            .with_kerning(ch, 0x20, -0.5);
    }

    (fnt_fixture.build(), ft2_fixture.build())
}

fn decode_containers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Font container decoding");
    group.significance_level(0.1).sample_size(500);

    let (fnt_buffer, ft2_buffer) = ascii_fixtures();

    group.bench_function("fnt ascii", |b| {
        b.iter(|| fnt::decode(black_box(&fnt_buffer), &RawContainer))
    });
    group.bench_function("ft2 ascii", |b| {
        b.iter(|| ft2::decode(black_box(&ft2_buffer), &RawContainer))
    });

    group.finish();
}

criterion_group!(benches, decode_containers);
criterion_main!(benches);
