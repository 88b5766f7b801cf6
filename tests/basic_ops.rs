//! Direction, value and polarity operations plus reset behavior across all
//! four chip models.

mod common;

use common::FakeChip;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
use pca95xx::{ChipModel, Direction, Error, Pca95xx};

const ADDR: u8 = 0x20;

const ALL_MODELS: [ChipModel; 4] = [
    ChipModel::Pca9554,
    ChipModel::Pca9555,
    ChipModel::Pcal9554,
    ChipModel::Pcal9555,
];

#[test]
fn direction_round_trip_is_per_pin() {
    for model in ALL_MODELS {
        let chip = FakeChip::new();
        let expander = Pca95xx::new(chip.clone(), ADDR, model);
        expander.reset_to_defaults().unwrap();

        // Flip pins to output one at a time; already-flipped pins must keep
        // their state, untouched pins must still read as input.
        for pin in 0..=expander.max_pin() {
            expander.set_direction(pin, Direction::Output).unwrap();
            for other in 0..=expander.max_pin() {
                let expected = if other <= pin {
                    Direction::Output
                } else {
                    Direction::Input
                };
                assert_eq!(
                    expander.direction(other).unwrap(),
                    expected,
                    "{model:?} pin {other} after switching pin {pin}"
                );
            }
        }

        for pin in 0..=expander.max_pin() {
            expander.set_direction(pin, Direction::Input).unwrap();
            assert_eq!(expander.direction(pin).unwrap(), Direction::Input);
        }
    }
}

#[test]
fn set_value_only_touches_the_target_bit() {
    let chip = FakeChip::new();
    let expander = Pca95xx::pca9555(chip.clone(), ADDR);
    expander.reset_to_defaults().unwrap();

    expander.set_value(3, false).unwrap();
    assert_eq!(chip.reg16(0x02), 0xFFF7);
    expander.set_value(11, false).unwrap();
    assert_eq!(chip.reg16(0x02), 0xF7F7);
    expander.set_value(3, true).unwrap();
    assert_eq!(chip.reg16(0x02), 0xF7FF);

    assert!(expander.output_value(3).unwrap());
    assert!(!expander.output_value(11).unwrap());
}

#[test]
fn value_reads_the_input_register() {
    let chip = FakeChip::new();
    let expander = Pca95xx::pca9554(chip.clone(), ADDR);
    expander.reset_to_defaults().unwrap();

    chip.set_reg(0x00, 0b0100_0001);
    assert!(expander.value(0).unwrap());
    assert!(!expander.value(1).unwrap());
    assert!(expander.value(6).unwrap());
    assert_eq!(expander.read_input_port().unwrap(), 0b0100_0001);
}

#[test]
fn polarity_round_trip() {
    let chip = FakeChip::new();
    let expander = Pca95xx::pcal9555(chip.clone(), ADDR);
    expander.reset_to_defaults().unwrap();

    expander.set_polarity_inverted(9, true).unwrap();
    assert!(expander.polarity_inverted(9).unwrap());
    assert!(!expander.polarity_inverted(8).unwrap());
    assert_eq!(chip.reg16(0x04), 0x0200);

    expander.set_polarity_inverted(9, false).unwrap();
    assert!(!expander.polarity_inverted(9).unwrap());
    assert_eq!(chip.reg16(0x04), 0x0000);
}

#[test]
fn reset_writes_documented_defaults_pca9554() {
    let expectations = [
        Transaction::write(ADDR, vec![0x01, 0xFF]),
        Transaction::write(ADDR, vec![0x02, 0x00]),
        Transaction::write(ADDR, vec![0x03, 0xFF]),
    ];
    let mut bus = Mock::new(&expectations);
    let expander = Pca95xx::pca9554(bus.clone(), ADDR);
    expander.reset_to_defaults().unwrap();
    bus.done();
}

#[test]
fn reset_writes_documented_defaults_pca9555() {
    let expectations = [
        Transaction::write(ADDR, vec![0x02, 0xFF, 0xFF]),
        Transaction::write(ADDR, vec![0x04, 0x00, 0x00]),
        Transaction::write(ADDR, vec![0x06, 0xFF, 0xFF]),
    ];
    let mut bus = Mock::new(&expectations);
    let expander = Pca95xx::pca9555(bus.clone(), ADDR);
    expander.reset_to_defaults().unwrap();
    bus.done();
}

#[test]
fn reset_writes_documented_defaults_pcal9554() {
    let expectations = [
        Transaction::write(ADDR, vec![0x01, 0xFF]),
        Transaction::write(ADDR, vec![0x02, 0x00]),
        Transaction::write(ADDR, vec![0x03, 0xFF]),
        // Drive strength is a 16-bit register even on the 8-pin chip.
        Transaction::write(ADDR, vec![0x40, 0xFF, 0xFF]),
        Transaction::write(ADDR, vec![0x42, 0x00]),
        Transaction::write(ADDR, vec![0x43, 0x00]),
        Transaction::write(ADDR, vec![0x44, 0xFF]),
        Transaction::write(ADDR, vec![0x45, 0xFF]),
        Transaction::write(ADDR, vec![0x4F, 0x00]),
    ];
    let mut bus = Mock::new(&expectations);
    let expander = Pca95xx::pcal9554(bus.clone(), ADDR);
    expander.reset_to_defaults().unwrap();
    bus.done();
}

#[test]
fn reset_writes_documented_defaults_pcal9555() {
    let expectations = [
        Transaction::write(ADDR, vec![0x02, 0xFF, 0xFF]),
        Transaction::write(ADDR, vec![0x04, 0x00, 0x00]),
        Transaction::write(ADDR, vec![0x06, 0xFF, 0xFF]),
        Transaction::write(ADDR, vec![0x40, 0xFF, 0xFF]),
        Transaction::write(ADDR, vec![0x42, 0xFF, 0xFF]),
        Transaction::write(ADDR, vec![0x44, 0x00, 0x00]),
        Transaction::write(ADDR, vec![0x46, 0x00, 0x00]),
        Transaction::write(ADDR, vec![0x48, 0xFF, 0xFF]),
        Transaction::write(ADDR, vec![0x4A, 0xFF, 0xFF]),
        Transaction::write(ADDR, vec![0x4F, 0x00]),
    ];
    let mut bus = Mock::new(&expectations);
    let expander = Pca95xx::pcal9555(bus.clone(), ADDR);
    expander.reset_to_defaults().unwrap();
    bus.done();
}

#[test]
fn out_of_range_pin_issues_no_bus_traffic() {
    let mut bus = Mock::new(&[]);
    let expander = Pca95xx::pca9554(bus.clone(), ADDR);

    assert!(matches!(
        expander.set_direction(8, Direction::Output),
        Err(Error::InvalidPin { pin: 8, max: 7 })
    ));
    assert!(matches!(
        expander.value(200),
        Err(Error::InvalidPin { pin: 200, max: 7 })
    ));
    assert!(matches!(
        expander.set_polarity_inverted(8, true),
        Err(Error::InvalidPin { .. })
    ));
    assert!(expander.pin(8).is_err());

    bus.done();
}

#[test]
fn out_of_range_pin_checked_before_capabilities() {
    let mut bus = Mock::new(&[]);
    let expander = Pca95xx::pca9555(bus.clone(), ADDR);

    // Pin range wins over the missing capability on a basic model.
    assert!(matches!(
        expander.set_drive_strength(16, 2),
        Err(Error::InvalidPin { pin: 16, max: 15 })
    ));
    assert!(matches!(
        expander.set_pull(16, pca95xx::Pull::Up),
        Err(Error::InvalidPin { .. })
    ));

    bus.done();
}

#[test]
fn bus_errors_propagate_verbatim() {
    let expectations =
        [Transaction::write_read(ADDR, vec![0x00], vec![0x00]).with_error(ErrorKind::Other)];
    let mut bus = Mock::new(&expectations);
    let expander = Pca95xx::pca9554(bus.clone(), ADDR);

    assert!(matches!(expander.value(0), Err(Error::Bus(_))));

    bus.done();
}

#[test]
fn model_metadata() {
    use pca95xx::Capability;

    assert_eq!(ChipModel::Pca9554.max_pin(), 7);
    assert_eq!(ChipModel::Pca9555.max_pin(), 15);
    assert_eq!(ChipModel::Pcal9554.max_pin(), 7);
    assert_eq!(ChipModel::Pcal9555.max_pin(), 15);

    for model in [ChipModel::Pca9554, ChipModel::Pca9555] {
        let caps = model.capabilities();
        assert!(caps.has(Capability::InvertPolarity));
        assert!(!caps.has(Capability::PullUp));
        assert!(!caps.has(Capability::Latching));
    }
    for model in [ChipModel::Pcal9554, ChipModel::Pcal9555] {
        let caps = model.capabilities();
        assert!(caps.has(Capability::PullUp));
        assert!(caps.has(Capability::PullDown));
        assert!(caps.has(Capability::DriveMode));
        assert!(caps.has(Capability::DriveStrength));
        assert!(caps.has(Capability::Latching));
    }
}

#[test]
fn release_returns_the_bus() {
    let bus = Mock::new(&[]);
    let expander = Pca95xx::pca9554(bus, ADDR);
    assert_eq!(expander.address(), ADDR);
    let mut inner = expander.release();
    inner.done();
}
