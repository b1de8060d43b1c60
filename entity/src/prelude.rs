pub use super::announcement::Entity as Announcement;
pub use super::comment::Entity as Comment;
pub use super::event::Entity as Event;
pub use super::event_branch_tag::Entity as EventBranchTag;
pub use super::event_winner::Entity as EventWinner;
pub use super::leaderboard_override::Entity as LeaderboardOverride;
pub use super::photo::Entity as Photo;
pub use super::photo_tag::Entity as PhotoTag;
pub use super::user::Entity as User;
