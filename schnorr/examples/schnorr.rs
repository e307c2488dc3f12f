use curve::Secp256k1;
use schnorr::{Schnorr, Signature, VerifyingKey};
use tracing::info;

type Point = <Secp256k1 as curve::GroupContext>::Point;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut rng = rand::rng();
    let scheme = Schnorr::new(Secp256k1::default()).expect("scheme");
    let keys = scheme.generate_keys(&mut rng).expect("keygen");

    let vk_bytes = scheme
        .encode_verifying_key(keys.verifying_key())
        .expect("encode vk");
    info!(public_key = ?vk_bytes, "generated key pair");

    let message = b"Let me go";
    let sig = scheme
        .sign(&mut rng, message, keys.signing_key(), keys.verifying_key())
        .expect("sign");
    let sig_bytes = scheme.encode_signature(&sig).expect("encode sig");
    info!(signature = ?sig_bytes, "signed message");

    let vk: VerifyingKey<Point> = bincode::deserialize(
        &bincode::serialize(keys.verifying_key()).expect("serialize vk"),
    )
    .expect("deserialize vk");
    let sig2: Signature<Point> =
        bincode::deserialize(&bincode::serialize(&sig).expect("serialize sig"))
            .expect("deserialize sig");

    let valid = scheme.verify(message, &sig2, &vk);
    info!(valid, "verified original message");
    assert!(valid);

    let tampered = scheme.verify(b"Let it go", &sig2, &vk);
    info!(valid = tampered, "verified tampered message");
    assert!(!tampered);
}
