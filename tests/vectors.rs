//! Known-answer vectors and output invariants.

use apr1::{CRYPT_ALPHABET, Error, HASH_LEN, MAGIC, encode};

// password, salt, expected
const VECTORS: &[(&str, &str, &str)] = &[
    ("123456", "IyA2SUNJ", "$apr1$IyA2SUNJ$y19fq7yFUJTA6INGbjThg."),
    ("qwerty", "5d.PdkJC", "$apr1$5d.PdkJC$NC0X6S4M6r2softOSPJ2G."),
    ("password", "F0ajl09F", "$apr1$F0ajl09F$kPBydXR.hZiwsj1TXMMqF."),
    // openssl passwd -apr1 -salt <salt> <password>
    ("a", "abc", "$apr1$abc$RUt4qVhwNewYFWnPyK2Vf/"),
    ("0123456789abcdef", "16chars.", "$apr1$16chars.$C8eP2DV8K7BlHdWlOdSWf."),
    ("0123456789abcdefg", "17chars.", "$apr1$17chars.$Hkftt9HuztCrRZ1J6i3QW0"),
    (
        "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
        "saltsalt",
        "$apr1$saltsalt$2mFfzhmPOknAGlGo8.2/30",
    ),
    ("pässwörd", "ab/cd.EF", "$apr1$ab/cd.EF$4P8jNiMwyw/RgiewFNkDH1"),
    ("p", "", "$apr1$$ybkELnS08iMsIO3qVjHYv."),
];

/// Deterministic password/salt pairs of assorted lengths.
fn generated_inputs() -> Vec<(Vec<u8>, String)> {
    (1..=40usize)
        .map(|len| {
            let password = (0..len).map(|i| (i * 31 + len) as u8).collect();
            let salt = (0..len % 12)
                .map(|i| char::from(CRYPT_ALPHABET[(i * 7 + len) % 64]))
                .collect();
            (password, salt)
        })
        .collect()
}

#[test]
fn test_known_answer_vectors() {
    for &(password, salt, expected) in VECTORS {
        assert_eq!(
            encode(password, salt).unwrap(),
            expected,
            "password {:?} salt {:?}",
            password,
            salt
        );
    }
}

#[test]
fn test_deterministic() {
    for (password, salt) in generated_inputs() {
        assert_eq!(
            encode(&password, &salt).unwrap(),
            encode(&password, &salt).unwrap()
        );
    }
}

#[test]
fn test_format_invariant() {
    for (password, salt) in generated_inputs() {
        let digest = encode(&password, &salt).unwrap();
        assert_eq!(digest.len(), MAGIC.len() + salt.len() + 1 + HASH_LEN);

        let rest = digest.strip_prefix(MAGIC).unwrap();
        let hash = rest.strip_prefix(salt.as_str()).unwrap();
        let hash = hash.strip_prefix('$').unwrap();
        assert_eq!(hash.len(), HASH_LEN);
        assert!(hash.bytes().all(|b| CRYPT_ALPHABET.contains(&b)));
    }
}

#[test]
fn test_salt_passthrough() {
    for salt in ["", "x", "IyA2SUNJ", "a much longer salt than usual", "sp ace", "ünï"] {
        let parsed: apr1::Apr1Hash = encode("pw", salt).unwrap().parse().unwrap();
        assert_eq!(parsed.salt(), salt);
    }
}

#[test]
fn test_length_sensitivity() {
    let base = "passwordpasswordpassword";
    let digests: Vec<String> = (1..=base.len())
        .map(|len| encode(&base[..len], "IyA2SUNJ").unwrap())
        .collect();
    for (i, a) in digests.iter().enumerate() {
        for b in &digests[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_salt_sensitivity() {
    assert_ne!(
        encode("123456", "IyA2SUNJ").unwrap(),
        encode("123456", "IyA2SUNK").unwrap()
    );
}

#[test]
fn test_empty_password() {
    assert!(matches!(encode("", "IyA2SUNJ"), Err(Error::PasswordEmpty)));
    assert!(matches!(encode(Vec::new(), ""), Err(Error::PasswordEmpty)));
    assert_eq!(Error::PasswordEmpty.to_string(), "Password cannot be empty");
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = VECTORS
        .iter()
        .map(|&(password, salt, expected)| {
            std::thread::spawn(move || assert_eq!(encode(password, salt).unwrap(), expected))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
