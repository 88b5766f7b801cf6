use linux_embedded_hal::I2cdev;
use pca95xx::{Pca95xx, Pull};
use std::{thread, time::Duration};

// Buttons on the first four pins, active low via pull-ups.
const BUTTON_PINS: [u8; 4] = [0, 1, 2, 3];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let i2c = I2cdev::new("/dev/i2c-1")?;
    println!("Opening PCAL9555 at 0x20...");
    let expander = Pca95xx::pcal9555(i2c, 0x20);
    expander.reset_to_defaults()?;

    for pin_num in BUTTON_PINS {
        let pin = expander.pin(pin_num)?;
        pin.switch_to_input(Pull::Up, false)?;
        // Latching, so short presses survive until the next poll.
        pin.set_interrupt_enabled(true, true)?;
    }

    println!("Polling for button presses (Press Ctrl+C to stop)");
    loop {
        let asserted = expander.asserted_interrupt_pins()?;
        if !asserted.is_empty() {
            // One input read reports the latched levels and clears the
            // pending interrupts.
            let levels = expander.read_input_port()?;
            for pin in asserted {
                let pressed = levels & (1 << pin) == 0;
                println!("pin {pin}: interrupt, pressed={pressed}");
            }
        }
        thread::sleep(Duration::from_millis(50));
    }
}
