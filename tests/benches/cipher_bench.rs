use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scytale::{dispatch, CipherKind, Mode};

const KEYS: [(CipherKind, &str); 9] = [
    (CipherKind::Caesar, "7"),
    (CipherKind::Vigenere, "LEMON"),
    (CipherKind::Hill, "HILL"),
    (CipherKind::Playfair, "MONARCHY"),
    (CipherKind::Atbash, ""),
    (CipherKind::RailFence, "5"),
    (CipherKind::Adfgvx, "PRIVACY,GERMAN"),
    (CipherKind::Columnar, "ZEBRAS"),
    (CipherKind::Autokey, "QUEENLY"),
];

fn sample_text(len: usize) -> String {
    "THEQUICKBROWNFOXLEAPSOVERTHELAZYDOG".chars().cycle().take(len).collect()
}

fn bench_ciphers(c: &mut Criterion) {
    for mode in [Mode::Encrypt, Mode::Decrypt] {
        let mut group = c.benchmark_group(format!("classical-{mode}"));

        for size in [64usize, 1024, 16384] {
            let plaintext = sample_text(size);
            group.throughput(Throughput::Elements(size as u64));

            for (kind, key) in KEYS {
                let input = match mode {
                    Mode::Encrypt => plaintext.clone(),
                    Mode::Decrypt => match dispatch(kind, Mode::Encrypt, key, &plaintext) {
                        Ok(cipher) => cipher,
                        Err(err) => panic!("{kind}: {err}"),
                    },
                };
                group.bench_with_input(BenchmarkId::new(kind.name(), size), &input, |b, input| {
                    b.iter(|| dispatch(kind, mode, key, input));
                });
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_ciphers);
criterion_main!(benches);
