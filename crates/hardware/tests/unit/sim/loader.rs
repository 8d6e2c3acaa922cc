//! # Loader Tests

use std::io::Write;

use mipsim_core::common::{MemEntrySize, SimError};
use mipsim_core::sim::loader;
use mipsim_core::soc::MainMemory;
use mipsim_core::soc::traits::MemoryStore;
use tempfile::NamedTempFile;

fn create_temp_binary(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn file_image_lands_at_zero() {
    let file = create_temp_binary(&[0x24, 0x08, 0x00, 0x05, 0xfe, 0xed, 0xfe, 0xed]);
    let image = loader::load_file(file.path()).unwrap();

    let mut mem = MainMemory::new(64);
    loader::load_image(&mut mem, &image).unwrap();
    assert_eq!(mem.get_value(0, MemEntrySize::Word).unwrap(), 0x2408_0005);
    assert_eq!(mem.get_value(4, MemEntrySize::Word).unwrap(), 0xfeed_feed);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = loader::load_file(dir.path().join("absent.bin"));
    assert!(matches!(result, Err(SimError::Io(_))));
}

#[test]
fn words_past_the_end_are_rejected() {
    let mut mem = MainMemory::new(4);
    let result = loader::load_words(&mut mem, &[1, 2]);
    assert!(matches!(result, Err(SimError::Memory { cycle: 0, .. })));
}
