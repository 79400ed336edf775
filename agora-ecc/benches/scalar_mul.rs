use agora_ecc::curve::{BinaryCurve, Curve, ShortWeierstrassCurve};
use agora_ecc::{presets, BigInt, Domain, EccGfp};
use criterion::{criterion_group, criterion_main, Criterion};

use num_bigint::RandBigInt;
use rand::rngs::OsRng;
use rand::Rng;

fn bench_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_mul");

    let mut rng = OsRng;
    let secp = Domain::<ShortWeierstrassCurve>::try_from(presets::secp256k1()).unwrap();
    let k163 = Domain::<BinaryCurve>::try_from(presets::sect163k1()).unwrap();

    let n = 50_usize;
    let secp_scalars: Vec<BigInt> = (0..n)
        .map(|_| rng.gen_biguint_below(secp.order()).into())
        .collect();
    let k163_scalars: Vec<BigInt> = (0..n)
        .map(|_| rng.gen_biguint_below(k163.order()).into())
        .collect();

    group.bench_function("secp256k1", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| secp.curve().scalar_mul(secp.generator(), &secp_scalars[i]))
    });

    group.bench_function("sect163k1", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| k163.curve().scalar_mul(k163.generator(), &k163_scalars[i]))
    });

    group.finish();
}

fn bench_encrypt(c: &mut Criterion) {
    let mut rng = OsRng;
    let mut alice = EccGfp::with_domain(presets::secp256k1().try_into().unwrap());
    let mut bob = EccGfp::with_domain(presets::secp256k1().try_into().unwrap());
    alice.generate_keypair(&mut rng).unwrap();
    let bob_keys = bob.generate_keypair(&mut rng).unwrap();
    alice.set_recipient_key(bob_keys.public).unwrap();

    c.bench_function("secp256k1_encrypt", |b| {
        b.iter(|| alice.encrypt(&mut rng, "benchmark message"))
    });
}

criterion_group!(benches, bench_scalar_mul, bench_encrypt);
criterion_main!(benches);
