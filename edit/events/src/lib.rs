/*!
    Editorial event records built on the timecode core.
*/

mod event;

pub use self::event::EditEvent;
