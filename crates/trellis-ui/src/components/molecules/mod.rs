pub mod alert;
pub mod breadcrumbs;
pub mod card;
pub mod checkbox_group;
pub mod file_list;
pub mod form_field;
pub mod radio_group;
pub mod stat;
pub mod tabs;
pub mod timeline;

pub use alert::Alert;
pub use breadcrumbs::Breadcrumbs;
pub use card::Card;
pub use checkbox_group::CheckboxGroup;
pub use file_list::FileList;
pub use form_field::FormField;
pub use radio_group::RadioGroup;
pub use stat::Stat;
pub use tabs::Tabs;
pub use timeline::Timeline;
