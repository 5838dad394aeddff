pub mod avatar;
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod divider;
pub mod input;
pub mod loading;
pub mod radio;
pub mod select;
pub mod textarea;
pub mod toggle;

pub use avatar::Avatar;
pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use divider::Divider;
pub use input::Input;
pub use loading::Loading;
pub use radio::Radio;
pub use select::Select;
pub use textarea::Textarea;
pub use toggle::Toggle;
