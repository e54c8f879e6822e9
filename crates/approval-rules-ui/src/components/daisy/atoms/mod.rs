pub(crate) mod badge;
pub(crate) mod button;
pub(crate) mod checkbox;
pub(crate) mod input;
pub(crate) mod select;

pub(crate) use badge::Badge;
pub(crate) use button::Button;
pub(crate) use checkbox::Checkbox;
pub(crate) use input::Input;
pub(crate) use select::Select;
