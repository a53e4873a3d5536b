pub mod notification_type;

pub use notification_type::{
    NewNotificationType, NotificationType, NotificationTypeListResponse, NotificationTypeResponse,
};
