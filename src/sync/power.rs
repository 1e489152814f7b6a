//! Oscillator power curve
//!
//! Power rises quickly right after a flash and ever slower as it nears the
//! flash level. A peer flash adds a fixed boost, which moves the phase most
//! where the curve is flat.

/// Power gained in one control loop iteration at the given power level.
pub const fn power_step(power: u16) -> u16 {
    match power {
        6001.. => 1,
        4001..=6000 => 2,
        3001..=4000 => 4,
        2001..=3000 => 8,
        _ => 16,
    }
}

/// Number of iterations needed to get from zero to above `flash_power`
/// without any peer boosts, i.e. the free running period.
pub fn free_running_iterations(flash_power: u16) -> u32 {
    let mut power: u16 = 0;
    let mut iterations = 0;
    while power <= flash_power {
        let Some(next) = power.checked_add(power_step(power)) else {
            break;
        };
        power = next;
        iterations += 1;
    }
    iterations
}
