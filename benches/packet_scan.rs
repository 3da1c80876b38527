// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use image_agl::application::port::FixedElevation;
use image_agl::application::AglResolver;
use image_agl::media::read_packet_altitudes;
use std::hint::black_box;

const PACKET: &str = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description xmlns:drone-dji="http://www.dji.com/drone-dji/1.0/"
    drone-dji:AbsoluteAltitude="+512.34"
    drone-dji:RelativeAltitude="+50.20"/>
 </rdf:RDF>
</x:xmpmeta>"#;

/// Roughly the size of a drone photo, with the packet after the first few hundred KiB.
fn synthetic_image() -> Vec<u8> {
    let mut bytes = vec![0xA5u8; 512 * 1024];
    bytes.extend_from_slice(PACKET.as_bytes());
    bytes.extend(std::iter::repeat_n(0x5Au8, 4 * 1024 * 1024));
    bytes
}

fn packet_scan_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("packet_scan");
    let image = synthetic_image();

    group.bench_function("read_packet_altitudes", |b| {
        b.iter(|| black_box(read_packet_altitudes(black_box(&image))));
    });

    let resolver = AglResolver::new(FixedElevation::new(0.0));
    group.bench_function("resolve_bytes", |b| {
        b.iter(|| black_box(resolver.resolve_bytes(black_box(&image))));
    });

    group.finish();
}

criterion_group!(benches, packet_scan_benchmark);
criterion_main!(benches);
