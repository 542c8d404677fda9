//! Admin dashboard view models.
//!
//! # Design
//! - Every list has its own empty placeholder.
//! - Ranks are 1-based and only shown for ordered top-N lists.

use crate::core::format::{date_label, rating_label};
use crate::i18n::TranslationBundle;
use torrex_api_models::{
    AdminStats, CategoryStat, PeriodCategoryStat, PeriodStats, TorrentRecord, UserRecord,
    WeeklyCategoryStat,
};

/// One counter in the general statistics grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneralCard {
    /// Counter label.
    pub label: String,
    /// Counter value.
    pub value: String,
}

/// One row in a statistics list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRow {
    /// 1-based position for ranked lists.
    pub rank: Option<usize>,
    /// Torrent title or category name.
    pub label: String,
    /// Primary value.
    pub value: String,
    /// Secondary values.
    pub extras: Vec<String>,
}

/// Rows of a statistics section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatRows {
    /// Placeholder when the list is empty.
    Empty(String),
    /// Rendered rows.
    Rows(Vec<StatRow>),
}

/// Headed statistics list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsSection {
    /// Section heading.
    pub heading: String,
    /// Section rows.
    pub rows: StatRows,
}

/// Dashboard statistics view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsView {
    /// General statistics heading.
    pub general_heading: String,
    /// General counters.
    pub general: Vec<GeneralCard>,
    /// Top-N and category sections, in display order.
    pub sections: Vec<StatsSection>,
}

/// Custom period statistics view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodView {
    /// `Periodo: from - to` heading.
    pub heading: String,
    /// Categories active in the period.
    pub categories: StatsSection,
    /// Most downloaded torrents in the period.
    pub popular: StatsSection,
}

/// Ban control for a user card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BanControl {
    /// Ban button.
    Button,
    /// Notice replacing the button for banned users.
    AlreadyBanned(String),
}

/// One user search result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserCard {
    /// User identifier.
    pub id: String,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Raw role.
    pub role: String,
    /// Registration date.
    pub registered: String,
    /// Active or banned status label.
    pub status: String,
    /// Ban control.
    pub ban: BanControl,
}

/// User search results view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserResultsView {
    /// Placeholder when nothing matched.
    Empty(String),
    /// Result cards.
    Users(Vec<UserCard>),
}

struct Labels<'a> {
    bundle: &'a TranslationBundle,
    na: String,
}

impl Labels<'_> {
    fn count(&self, key: &str, count: u64) -> String {
        self.bundle.fill(key, &[("count", &count.to_string())])
    }

    fn stars(&self, rating: Option<f64>) -> String {
        format!("★ {}", rating_label(rating, &self.na))
    }

    fn rows<T>(&self, items: &[T], empty_key: &str, map: impl Fn(usize, &T) -> StatRow) -> StatRows {
        if items.is_empty() {
            StatRows::Empty(self.bundle.text(empty_key, ""))
        } else {
            StatRows::Rows(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| map(index + 1, item))
                    .collect(),
            )
        }
    }

    fn section<T>(
        &self,
        heading_key: &str,
        items: &[T],
        empty_key: &str,
        map: impl Fn(usize, &T) -> StatRow,
    ) -> StatsSection {
        StatsSection {
            heading: self.bundle.text(heading_key, ""),
            rows: self.rows(items, empty_key, map),
        }
    }

    fn by_downloads(&self, rank: usize, torrent: &TorrentRecord) -> StatRow {
        StatRow {
            rank: Some(rank),
            label: torrent.title.clone(),
            value: self.count("admin.downloads_value", torrent.download_count),
            extras: Vec::new(),
        }
    }

    fn by_rating(&self, rank: usize, torrent: &TorrentRecord) -> StatRow {
        StatRow {
            rank: Some(rank),
            label: torrent.title.clone(),
            value: self.stars(torrent.average_rating),
            extras: Vec::new(),
        }
    }

    fn weekly(&self, stat: &WeeklyCategoryStat) -> StatRow {
        StatRow {
            rank: None,
            label: stat.category.clone(),
            value: self.count("admin.new_value", stat.new_torrents_count),
            extras: vec![
                self.count("admin.downloads_value", stat.total_downloads),
                self.stars(stat.avg_rating),
            ],
        }
    }

    fn overall(&self, rank: usize, stat: &CategoryStat) -> StatRow {
        StatRow {
            rank: Some(rank),
            label: stat.category.clone(),
            value: self.count("admin.torrents_value", stat.total_torrents),
            extras: vec![
                self.count("admin.downloads_value", stat.total_downloads),
                self.stars(stat.avg_rating),
            ],
        }
    }

    fn period_category(&self, stat: &PeriodCategoryStat) -> StatRow {
        StatRow {
            rank: None,
            label: stat.category.clone(),
            value: self.count("admin.torrents_value", stat.torrents_count),
            extras: vec![
                self.count("admin.downloads_value", stat.total_downloads),
                self.stars(stat.avg_rating),
            ],
        }
    }
}

fn labels(bundle: &TranslationBundle) -> Labels<'_> {
    Labels {
        bundle,
        na: bundle.text("common.na", "N/A"),
    }
}

/// Build the dashboard statistics view.
#[must_use]
pub fn build_stats(stats: &AdminStats, bundle: &TranslationBundle) -> StatsView {
    let labels = labels(bundle);
    let general = &stats.general_stats;
    let card = |key: &str, value: u64| GeneralCard {
        label: bundle.text(key, ""),
        value: value.to_string(),
    };
    StatsView {
        general_heading: bundle.text("admin.general", ""),
        general: vec![
            card("admin.total_torrents", general.total_torrents),
            card("admin.total_users", general.total_users),
            card("admin.total_comments", general.total_comments),
            card("admin.total_downloads", general.total_downloads),
            card("admin.new_week", general.new_torrents_week),
        ],
        sections: vec![
            labels.section(
                "admin.by_downloads",
                &stats.by_downloads,
                "admin.no_torrents",
                |rank, torrent| labels.by_downloads(rank, torrent),
            ),
            labels.section(
                "admin.by_rating",
                &stats.by_rating,
                "admin.no_torrents",
                |rank, torrent| labels.by_rating(rank, torrent),
            ),
            labels.section(
                "admin.weekly",
                &stats.weekly_by_category,
                "admin.no_weekly",
                |_, stat| labels.weekly(stat),
            ),
            labels.section(
                "admin.overall",
                &stats.categories_overall,
                "admin.no_categories",
                |rank, stat| labels.overall(rank, stat),
            ),
        ],
    }
}

/// Build the custom period view.
#[must_use]
pub fn build_period(stats: &PeriodStats, bundle: &TranslationBundle) -> PeriodView {
    let labels = labels(bundle);
    PeriodView {
        heading: bundle.fill(
            "admin.period",
            &[
                ("from", &date_label(stats.period.from.as_deref())),
                ("to", &date_label(stats.period.to.as_deref())),
            ],
        ),
        categories: labels.section(
            "admin.period_categories",
            &stats.categories_in_period,
            "admin.period_empty",
            |_, stat| labels.period_category(stat),
        ),
        popular: labels.section(
            "admin.period_popular",
            &stats.popular_in_period,
            "admin.period_empty",
            |rank, torrent| labels.by_downloads(rank, torrent),
        ),
    }
}

/// Build the user search results view.
#[must_use]
pub fn build_users(users: &[UserRecord], bundle: &TranslationBundle) -> UserResultsView {
    if users.is_empty() {
        return UserResultsView::Empty(bundle.text("admin.users_empty", "Nessun utente trovato"));
    }
    UserResultsView::Users(
        users
            .iter()
            .map(|user| UserCard {
                id: user.id.clone(),
                username: user.username.clone(),
                email: user.email.clone(),
                role: user.role.clone(),
                registered: date_label(user.registration_date.as_deref()),
                status: if user.is_banned {
                    bundle.text("admin.status_banned", "")
                } else {
                    bundle.text("admin.status_active", "")
                },
                ban: if user.is_banned {
                    BanControl::AlreadyBanned(bundle.text("admin.already_banned", ""))
                } else {
                    BanControl::Button
                },
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use torrex_api_models::{GeneralStats, StatsPeriod};

    fn italian() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::It)
    }

    #[test]
    fn empty_dashboard_shows_every_placeholder() {
        let view = build_stats(&AdminStats::default(), &italian());
        assert_eq!(view.general.len(), 5);
        assert!(view.general.iter().all(|card| card.value == "0"));
        let placeholders: Vec<_> = view
            .sections
            .iter()
            .map(|section| match &section.rows {
                StatRows::Empty(text) => text.clone(),
                StatRows::Rows(_) => String::new(),
            })
            .collect();
        assert_eq!(
            placeholders,
            vec![
                "Nessun torrent trovato".to_string(),
                "Nessun torrent trovato".to_string(),
                "Nessun nuovo torrent nell'ultima settimana".to_string(),
                "Nessuna statistica per categoria".to_string(),
            ]
        );
    }

    #[test]
    fn ranked_rows_are_one_based() {
        let stats = AdminStats {
            general_stats: GeneralStats {
                total_torrents: 3,
                ..GeneralStats::default()
            },
            by_downloads: vec![
                TorrentRecord {
                    title: "A".into(),
                    download_count: 10,
                    ..TorrentRecord::default()
                },
                TorrentRecord {
                    title: "B".into(),
                    download_count: 4,
                    ..TorrentRecord::default()
                },
            ],
            weekly_by_category: vec![WeeklyCategoryStat {
                category: "Film".into(),
                new_torrents_count: 2,
                total_downloads: 7,
                avg_rating: None,
            }],
            ..AdminStats::default()
        };
        let view = build_stats(&stats, &italian());
        assert_eq!(view.general[0].value, "3");
        let StatRows::Rows(rows) = &view.sections[0].rows else {
            panic!("expected rows");
        };
        assert_eq!(rows[1].rank, Some(2));
        assert_eq!(rows[1].value, "4 download");
        let StatRows::Rows(weekly) = &view.sections[2].rows else {
            panic!("expected weekly rows");
        };
        assert_eq!(weekly[0].rank, None);
        assert_eq!(weekly[0].value, "2 nuovi");
        assert_eq!(weekly[0].extras, vec!["7 download".to_string(), "★ N/A".to_string()]);
    }

    #[test]
    fn period_heading_formats_dates() {
        let stats = PeriodStats {
            period: StatsPeriod {
                from: Some("Mon, 01 Jan 2024 00:00:00 GMT".into()),
                to: Some("Wed, 31 Jan 2024 00:00:00 GMT".into()),
            },
            ..PeriodStats::default()
        };
        let view = build_period(&stats, &italian());
        assert_eq!(view.heading, "Periodo: 01/01/2024 - 31/01/2024");
        assert_eq!(
            view.popular.rows,
            StatRows::Empty("Nessun torrent in questo periodo".into())
        );
    }

    #[test]
    fn banned_users_lose_the_ban_button() {
        let users = vec![
            UserRecord {
                id: "u1".into(),
                username: "eve".into(),
                is_banned: true,
                ..UserRecord::default()
            },
            UserRecord {
                id: "u2".into(),
                username: "bob".into(),
                ..UserRecord::default()
            },
        ];
        let UserResultsView::Users(cards) = build_users(&users, &italian()) else {
            panic!("expected users");
        };
        assert_eq!(
            cards[0].ban,
            BanControl::AlreadyBanned("Utente già bannato".into())
        );
        assert_eq!(cards[0].status, "❌ Bannato");
        assert_eq!(cards[1].ban, BanControl::Button);
        assert_eq!(
            build_users(&[], &italian()),
            UserResultsView::Empty("Nessun utente trovato".into())
        );
    }
}
