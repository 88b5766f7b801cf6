use linux_embedded_hal::I2cdev;
use pca95xx::Pca95xx;
use std::{thread, time::Duration};

// Pin wired to the LED.
const BLINK_PIN: u8 = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let i2c = I2cdev::new("/dev/i2c-1")?;
    println!("Opening PCA9555 at 0x20...");
    let expander = Pca95xx::pca9555(i2c, 0x20);
    expander.reset_to_defaults()?;

    let led = expander.pin(BLINK_PIN)?;
    led.switch_to_output(false)?;

    println!("Blinking pin {} (Press Ctrl+C to stop)", led.number());
    loop {
        led.set_value(true)?;
        thread::sleep(Duration::from_millis(250));
        led.set_value(false)?;
        thread::sleep(Duration::from_millis(250));
    }
}
