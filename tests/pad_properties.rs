//! Value-range properties of the pad record.
//!
//! These run against local `Pad` values rather than the process-wide
//! record, so they need no serialization and can explore the full input
//! ranges.

use proptest::prelude::*;

use vxpad::{Buttons, Pad, Side, Stick};

proptest! {
    #[test]
    fn prop_trigger_value_reflected_exactly(value in any::<u8>(), left in any::<bool>()) {
        let mut pad = Pad::default();
        let side = if left { Side::Left } else { Side::Right };
        pad.set_trigger(side, value);

        let (written, untouched) = if left {
            (pad.left_trigger, pad.right_trigger)
        } else {
            (pad.right_trigger, pad.left_trigger)
        };
        prop_assert_eq!(written, value);
        prop_assert_eq!(untouched, 0);
    }

    #[test]
    fn prop_thumb_pair_reflected_exactly(x in any::<i16>(), y in any::<i16>(), left in any::<bool>()) {
        let mut pad = Pad::default();
        let side = if left { Side::Left } else { Side::Right };
        pad.set_thumb(side, x, y);

        let (written, untouched) = if left {
            (pad.left_stick, pad.right_stick)
        } else {
            (pad.right_stick, pad.left_stick)
        };
        prop_assert_eq!(written, Stick { x, y });
        prop_assert_eq!(untouched, Stick::default());
    }

    #[test]
    fn prop_button_set_is_bitwise_or(mask in any::<u16>(), prior in any::<u16>()) {
        let mut pad = Pad {
            buttons: Buttons::from_bits_retain(prior),
            ..Default::default()
        };
        pad.set_button(Buttons::from_bits_retain(mask), true);
        prop_assert_eq!(pad.buttons.bits(), prior | mask);
    }

    #[test]
    fn prop_button_clear_is_bitwise_and_not(mask in any::<u16>(), prior in any::<u16>()) {
        let mut pad = Pad {
            buttons: Buttons::from_bits_retain(prior),
            ..Default::default()
        };
        pad.set_button(Buttons::from_bits_retain(mask), false);
        prop_assert_eq!(pad.buttons.bits(), prior & !mask);
    }

    #[test]
    fn prop_mutations_touch_only_their_field(value in any::<u8>(), x in any::<i16>(), y in any::<i16>()) {
        let mut pad = Pad::default();
        pad.set_button(Buttons::START, true);
        pad.set_trigger(Side::Left, value);
        pad.set_thumb(Side::Right, x, y);

        prop_assert_eq!(pad.buttons, Buttons::START);
        prop_assert_eq!(pad.left_trigger, value);
        prop_assert_eq!(pad.right_trigger, 0);
        prop_assert_eq!(pad.left_stick, Stick::default());
        prop_assert_eq!(pad.right_stick, Stick { x, y });
    }
}
