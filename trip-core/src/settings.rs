//! Account settings panels with an explicit draft/commit boundary.
//!
//! Each panel holds a committed value plus an optional editable draft.
//! Edits only ever touch the draft; `save` publishes it and `cancel`
//! discards it, so readers outside an editing session always observe the
//! last committed value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Draft/committed pair for an editable settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel<T: Clone> {
    committed: T,
    draft: Option<T>,
}

impl<T: Clone> Panel<T> {
    pub fn new(initial: T) -> Self {
        Self {
            committed: initial,
            draft: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Begins an editing session by cloning the committed value into the
    /// draft. A second call while already editing keeps the current draft.
    pub fn edit(&mut self) -> &mut T {
        let Self { committed, draft } = self;
        draft.get_or_insert_with(|| committed.clone())
    }

    /// The editable draft, if an editing session is open.
    pub fn draft_mut(&mut self) -> Option<&mut T> {
        self.draft.as_mut()
    }

    /// Publishes the draft as the committed value. No-op when not editing.
    pub fn save(&mut self) {
        if let Some(draft) = self.draft.take() {
            self.committed = draft;
        }
    }

    /// Discards the draft, keeping the committed value. No-op when not
    /// editing.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// The last committed value, regardless of any open draft.
    pub fn committed(&self) -> &T {
        &self.committed
    }
}

impl<T: Clone + Default> Default for Panel<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// How often a recurring notification is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertFrequency {
    Immediate,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailNotifications {
    pub price_alerts: bool,
    pub trip_reminders: bool,
    pub booking_confirmations: bool,
    pub community_activity: bool,
    pub newsletter: bool,
    pub promotions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotifications {
    pub price_alerts: bool,
    pub trip_reminders: bool,
    pub booking_confirmations: bool,
    pub community_activity: bool,
    pub emergency_alerts: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsNotifications {
    pub trip_reminders: bool,
    pub booking_confirmations: bool,
    pub emergency_alerts: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: EmailNotifications,
    pub push: PushNotifications,
    pub sms: SmsNotifications,
    pub price_alert_frequency: AlertFrequency,
    pub community_digest_frequency: AlertFrequency,
    pub newsletter_frequency: AlertFrequency,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: EmailNotifications {
                price_alerts: true,
                trip_reminders: true,
                booking_confirmations: true,
                community_activity: false,
                newsletter: true,
                promotions: false,
            },
            push: PushNotifications {
                price_alerts: true,
                trip_reminders: true,
                booking_confirmations: true,
                community_activity: false,
                emergency_alerts: true,
            },
            sms: SmsNotifications {
                trip_reminders: false,
                booking_confirmations: true,
                emergency_alerts: true,
            },
            price_alert_frequency: AlertFrequency::Immediate,
            community_digest_frequency: AlertFrequency::Weekly,
            newsletter_frequency: AlertFrequency::Monthly,
        }
    }
}

/// Who can see a piece of profile or trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Friends,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCollection {
    pub analytics: bool,
    pub personalization: bool,
    pub marketing: bool,
    pub third_party: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSharing {
    pub social_media: bool,
    pub partners: bool,
    pub research: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_visibility: Visibility,
    pub trip_visibility: Visibility,
    pub activity_visibility: Visibility,
    pub allow_messages: bool,
    pub allow_friend_requests: bool,
    pub show_online_status: bool,
    pub data_collection: DataCollection,
    pub data_sharing: DataSharing,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visibility: Visibility::Friends,
            trip_visibility: Visibility::Private,
            activity_visibility: Visibility::Friends,
            allow_messages: true,
            allow_friend_requests: true,
            show_online_status: false,
            data_collection: DataCollection {
                analytics: true,
                personalization: true,
                marketing: false,
                third_party: false,
            },
            data_sharing: DataSharing {
                social_media: false,
                partners: false,
                research: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub login_notifications: bool,
    pub session_timeout_minutes: u32,
    pub password_last_changed: Option<NaiveDate>,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_enabled: true,
            login_notifications: true,
            session_timeout_minutes: 30,
            password_last_changed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn save_publishes_the_draft() {
        let mut panel = Panel::new(SecuritySettings::default());

        panel.edit().two_factor_enabled = false;
        assert!(panel.committed().two_factor_enabled); // draft not visible yet

        panel.save();
        assert!(!panel.committed().two_factor_enabled);
        assert!(!panel.is_editing());
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut panel = Panel::new(PrivacySettings::default());

        panel.edit().profile_visibility = Visibility::Public;
        panel.cancel();

        assert_eq!(
            panel.committed().profile_visibility,
            Visibility::Friends
        );
        assert!(!panel.is_editing());
    }

    #[test]
    fn edit_while_editing_keeps_current_draft() {
        let mut panel = Panel::new(NotificationSettings::default());

        panel.edit().email.promotions = true;
        // Second edit() must not reset the draft back to the committed value.
        assert!(panel.edit().email.promotions);
    }

    #[test]
    fn save_without_edit_is_a_no_op() {
        let mut panel = Panel::new(NotificationSettings::default());
        let before = panel.committed().clone();

        panel.save();

        assert_eq!(panel.committed(), &before);
    }

    #[test]
    fn draft_mut_is_none_outside_editing() {
        let mut panel = Panel::new(SecuritySettings::default());

        assert!(panel.draft_mut().is_none());
        panel.edit();
        assert!(panel.draft_mut().is_some());
    }

    #[test]
    fn defaults_match_the_shipped_panels() {
        let notifications = NotificationSettings::default();
        assert!(notifications.email.price_alerts);
        assert!(!notifications.sms.trip_reminders);
        assert_eq!(
            notifications.community_digest_frequency,
            AlertFrequency::Weekly
        );

        let privacy = PrivacySettings::default();
        assert_eq!(privacy.trip_visibility, Visibility::Private);
        assert!(privacy.data_collection.analytics);
        assert!(!privacy.data_sharing.partners);

        let security = SecuritySettings::default();
        assert_eq!(security.session_timeout_minutes, 30);
    }
}
