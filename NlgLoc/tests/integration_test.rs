use std::fs;
use std::path::Path;

use nlgloc::converter::{self, ConvertOptions, ConvertPhase, ConvertProgress};
use nlgloc::formats::dict::{DATA_HEADER_SIZE, DATA_MAGIC, data_path_for};
use nlgloc::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::tempdir;

/// Little-endian NLOC: language 7, `{1, "Hi"}` at offset 0, `{2, "Yo"}` at offset 3
fn sample_nloc() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"NLOC");
    for word in [1u32, 7, 2, 0, 1, 0, 2, 3] {
        data.extend_from_slice(&word.to_le_bytes());
    }
    for unit in "Hi\0Yo\0".encode_utf16() {
        data.extend_from_slice(&unit.to_le_bytes());
    }
    data
}

fn sample_file() -> LocalizationFile {
    LocalizationFile {
        lang_id: Some(7),
        messages: vec![Message::new(1, "Hi"), Message::new(2, "Yo")],
    }
}

/// A `.dict`/`.data` pair the right size for injection
fn write_container(dir: &Path) -> std::path::PathBuf {
    let dict_path = dir.join("message.dict");
    let mut dict = vec![0u8; 0x90];
    dict[..4].copy_from_slice(&[0x58, 0x24, 0xF3, 0xA9]);
    fs::write(&dict_path, &dict).unwrap();
    fs::write(data_path_for(&dict_path), [0u8; 0x10]).unwrap();
    dict_path
}

#[test]
fn test_binary_round_trip() {
    let file = parse_nloc_bytes(&sample_nloc(), Endian::Little).unwrap();
    assert_eq!(file, sample_file());

    let encoded = to_nloc_bytes(&file, Endian::Little).unwrap();
    assert_eq!(encoded, sample_nloc());
    assert_eq!(parse_nloc_bytes(&encoded, Endian::Little).unwrap(), file);
}

#[test]
fn test_big_endian_round_trip() {
    let encoded = to_nloc_bytes(&sample_file(), Endian::Big).unwrap();
    assert_eq!(FileType::detect(&encoded), Some(FileType::NlocBe));
    assert_eq!(parse_nloc_bytes(&encoded, Endian::Big).unwrap(), sample_file());
}

#[test]
fn test_text_example() {
    let file = parse_nloct("langid: \"en\"\n\"hello\"    World\n").unwrap();
    assert_eq!(file.lang_id, Some(hash_str("en").unwrap()));
    assert_eq!(file.messages, vec![Message::new(hash_str("hello").unwrap(), "World")]);

    let registry = PlaintextRegistry::from_lines(["en", "hello"]);
    assert_eq!(
        to_nloct_string(&file, &registry),
        "langid: \"en\"\n\"hello\"    World\n"
    );
}

#[test]
fn test_unknown_ids_render_as_hex() {
    let registry = PlaintextRegistry::empty();
    assert_eq!(render_id(0xA, &registry), "A");
    assert_eq!(render_id(0x100, &registry), "100");
}

#[test]
fn test_merge_example() {
    let mut base = LocalizationFile {
        lang_id: Some(5),
        messages: vec![Message::new(1, "A"), Message::new(2, "B")],
    };
    let patch = LocalizationFile {
        lang_id: None,
        messages: vec![Message::new(2, "B2"), Message::new(3, "C")],
    };

    let stats = base.update(&patch).unwrap();
    assert_eq!(stats, MergeStats { updated: 1, added: 1 });
    assert_eq!(base.lang_id, Some(5));
    assert_eq!(
        base.messages,
        vec![Message::new(1, "A"), Message::new(2, "B2"), Message::new(3, "C")]
    );

    let other = LocalizationFile::with_lang_id(9);
    assert!(matches!(
        base.update(&other),
        Err(Error::LanguageMismatch { base: 5, patch: 9 })
    ));
}

#[test]
fn test_convert_binary_to_text_and_back() {
    let dir = tempdir().unwrap();
    let loc = dir.path().join("message.loc");
    fs::write(&loc, sample_nloc()).unwrap();

    let registry = PlaintextRegistry::empty();
    let loct = converter::default_output_path(&loc);
    assert_eq!(loct, dir.path().join("message.loct"));

    converter::convert(&loc, &loct, &ConvertOptions::default(), &registry).unwrap();
    assert_eq!(
        fs::read_to_string(&loct).unwrap(),
        "langid: 7\n1    Hi\n2    Yo\n"
    );

    let back = dir.path().join("back.loc");
    converter::convert(&loct, &back, &ConvertOptions::default(), &registry).unwrap();
    assert_eq!(fs::read(&back).unwrap(), sample_nloc());
}

#[test]
fn test_convert_with_patches_and_sort() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("base.loct");
    let patch = dir.path().join("patch.loct");
    let out = dir.path().join("out.loc");
    fs::write(&base, "langid: 7\n3    Three\n1    One\n").unwrap();
    fs::write(&patch, "# fixes\n1    Uno\n2    Two\n").unwrap();

    let options = ConvertOptions::default()
        .with_patch(&patch)
        .with_endian(Endian::Big)
        .sorted();

    let phases = std::cell::RefCell::new(Vec::new());
    converter::convert_with_progress(
        &base,
        &out,
        &options,
        &PlaintextRegistry::empty(),
        &|progress: &ConvertProgress| phases.borrow_mut().push((progress.phase, progress.current, progress.total)),
    )
    .unwrap();

    assert_eq!(
        phases.into_inner(),
        vec![
            (ConvertPhase::ReadingSource, 1, 4),
            (ConvertPhase::Patching, 2, 4),
            (ConvertPhase::Sorting, 3, 4),
            (ConvertPhase::WritingOutput, 4, 4),
            (ConvertPhase::Complete, 4, 4),
        ]
    );

    assert_eq!(FileType::detect_file(&out).unwrap(), Some(FileType::NlocBe));
    let result = read_localization_file(&out).unwrap();
    assert_eq!(result.lang_id, Some(7));
    assert_eq!(
        result.messages,
        vec![Message::new(1, "Uno"), Message::new(2, "Two"), Message::new(3, "Three")]
    );
}

#[test]
fn test_convert_rejects_language_mismatch() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("base.loct");
    let patch = dir.path().join("patch.loct");
    fs::write(&base, "langid: 5\n1    A\n").unwrap();
    fs::write(&patch, "langid: 9\n1    B\n").unwrap();

    let err = converter::convert(
        &base,
        dir.path().join("out.loc"),
        &ConvertOptions::default().with_patch(&patch),
        &PlaintextRegistry::empty(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::LanguageMismatch { base: 5, patch: 9 }));
    assert!(!dir.path().join("out.loc").exists());
}

#[test]
fn test_convert_unsupported_output() {
    let dir = tempdir().unwrap();
    let loc = dir.path().join("message.loc");
    fs::write(&loc, sample_nloc()).unwrap();

    let err = converter::convert(
        &loc,
        dir.path().join("message.txt"),
        &ConvertOptions::default(),
        &PlaintextRegistry::empty(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnsupportedOutputFormat(ext) if ext == "txt"));
}

#[test]
fn test_dict_injection_and_read_back() {
    let dir = tempdir().unwrap();
    let dict_path = write_container(dir.path());
    let loc = dir.path().join("message.loc");
    fs::write(&loc, sample_nloc()).unwrap();

    converter::convert(&loc, &dict_path, &ConvertOptions::default(), &PlaintextRegistry::empty())
        .unwrap();

    let nloc_len = sample_nloc().len();
    let data = fs::read(data_path_for(&dict_path)).unwrap();
    let padded = (DATA_HEADER_SIZE + nloc_len).next_multiple_of(8);
    assert_eq!(data.len(), padded);
    assert_eq!(&data[..4], &DATA_MAGIC.to_le_bytes());
    assert_eq!(&data[4..8], &(nloc_len as u32).to_le_bytes());

    let dict = fs::read(&dict_path).unwrap();
    assert_eq!(dict.len(), 0x90);
    assert_eq!(&dict[0x68..0x6C], &(nloc_len.next_multiple_of(4) as u32).to_le_bytes());
    assert_eq!(&dict[0x74..0x78], &(padded as u32).to_le_bytes());
    assert_eq!(&dict[0x84..0x88], &(padded as u32).to_le_bytes());

    assert_eq!(FileType::detect_file(&dict_path).unwrap(), Some(FileType::Dict));
    assert_eq!(read_localization_file(&dict_path).unwrap(), sample_file());
}

#[test]
fn test_dict_injection_needs_existing_pair() {
    let dir = tempdir().unwrap();
    let dict_path = write_container(dir.path());
    fs::remove_file(data_path_for(&dict_path)).unwrap();

    let err = nlgloc::formats::dict::inject_into_dict_pair(
        &sample_nloc(),
        &dict_path,
        &data_path_for(&dict_path),
    )
    .unwrap_err();
    assert!(matches!(err, Error::ContainerFileMissing(_)));
}

#[test]
fn test_plaintext_registry_from_word_list() {
    let dir = tempdir().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, "en\nmenu_start\n").unwrap();

    let registry = PlaintextRegistry::from_path(&words);
    assert_eq!(registry.lookup(hash_str("menu_start").unwrap()), Some("menu_start"));
    assert_eq!(registry.lookup(hash_str("MENU_START").unwrap()), Some("menu_start"));
    assert_eq!(registry.lookup(0x1234), None);

    let missing = PlaintextRegistry::from_path(dir.path().join("missing.txt"));
    assert!(missing.is_empty());
}

proptest! {
    #[test]
    fn prop_hash_chains(
        a in prop::collection::vec(1u8..=255, 0..64),
        b in prop::collection::vec(1u8..=255, 0..64),
    ) {
        let joined = [a.as_slice(), b.as_slice()].concat();
        let chained = hash_with(&b, &HashOptions::default().with_seed(hash(&a)));
        prop_assert_eq!(hash(&joined), chained);
    }

    #[test]
    fn prop_empty_input_is_seed(seed in any::<u32>()) {
        prop_assert_eq!(hash_with(&[], &HashOptions::default().with_seed(seed)), seed);
    }

    #[test]
    fn prop_hash_ignores_ascii_case(s in "[ -~]{0,64}") {
        let swapped: String = s
            .chars()
            .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
            .collect();
        prop_assert_eq!(hash_str(&s).unwrap(), hash_str(&swapped).unwrap());
    }

    #[test]
    fn prop_hash_is_pure(data in prop::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(hash(&data), hash(&data));
    }
}
