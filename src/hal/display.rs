//! Display interface.
//!
//! Rendering lives outside the crate; the controller only switches the
//! display, clears it on menu transitions and asks for redraws.

/// On-device character display.
pub trait Display {
    /// Power the display (backlight) on.
    fn turn_on(&mut self);

    /// Power the display off.
    fn turn_off(&mut self);

    /// Clear the frame buffer.
    fn clear(&mut self);

    /// Ask the renderer to redraw on its next pass.
    fn request_refresh(&mut self) {}

    /// Tell the operator that parameters could not be saved.
    fn report_storage_failure(&mut self) {}
}

impl<T: Display + ?Sized> Display for &mut T {
    fn turn_on(&mut self) {
        (**self).turn_on()
    }

    fn turn_off(&mut self) {
        (**self).turn_off()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn request_refresh(&mut self) {
        (**self).request_refresh()
    }

    fn report_storage_failure(&mut self) {
        (**self).report_storage_failure()
    }
}
