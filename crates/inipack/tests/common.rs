#![allow(missing_docs, dead_code)]

/// A board configuration exercising every line kind.
pub const BOARD: &str = "\
; Board bring-up configuration
name = devkit-7
revision = 3

[uart]
baud = 115200
parity = none
# stop_bits = 2

[pins]
led = 13
button = 2

[calibration]
offset = -0.125
gain = 1.0625
label = factory default \r

[uart]
baud = 9600
";

/// Every `(section, key, value)` of `BOARD`, rendered one per line.
pub fn render(ini: &inipack::Ini<impl AsRef<[u8]>>) -> String {
    ini.iter()
        .map(|r| match r.section {
            Some(section) => format!("[{section}] {} = {}\n", r.key, r.value),
            None => format!("{} = {}\n", r.key, r.value),
        })
        .collect()
}
