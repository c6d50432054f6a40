//! strftime-style formatting of timestamps as Jalali dates.
//!
//! Only the calendar-dependent tokens are handled here:
//!
//! | token | replacement |
//! |-------|-------------|
//! | `%a` `%A` | localized weekday name |
//! | `%b` `%B` | localized month name |
//! | `%d` | day of month, zero-padded unless `fix_day` and below 10 |
//! | `%m` | zero-padded month number |
//! | `%y` `%Y` | two-digit / full year |
//! | `%p` `%P` | uppercase / lowercase AM-PM marker |
//!
//! Everything else, `%%` included, is left for the host's Gregorian formatter.

use tracing::{debug, trace};

use crate::config::CalendarConfig;
use crate::consts::{AM_CAPS_KEY, AM_KEY, DEFAULT_TEMPLATE_KEY, PM_CAPS_KEY, PM_KEY, TOKEN_MARKER};
use crate::error::CalendarError;
use crate::provider::{GregorianService, LocaleProvider};
use crate::query::timestamp_to_date_array;
use crate::types::{JalaliDateArray, JalaliMonth};

/// Hours before this are morning
const NOON: u8 = 12;

/// Formats timestamps as Jalali dates using injected collaborators.
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter<'a, L, G> {
    locale: &'a L,
    gregorian: &'a G,
    config: CalendarConfig,
}

/// Resolved text for each Jalali token of one timestamp
struct Substitutions {
    weekday: String,
    month: String,
    day: String,
    month_number: String,
    short_year: String,
    year: String,
    marker_caps: String,
    marker: String,
}

impl Substitutions {
    fn resolve<L: LocaleProvider>(
        locale: &L,
        array: &JalaliDateArray,
        fix_day: bool,
    ) -> Result<Self, CalendarError> {
        let date = array.date;
        // Abbreviated and full forms share the full-name key; no separate
        // abbreviation table exists for Jalali names.
        let weekday = locale.name_for(&array.weekday.full_key())?;
        let month = match JalaliMonth::new(date.month) {
            Ok(month) => locale.name_for(&month.translation_key())?,
            Err(_) => locale.name_for(&format!("month{}", date.month))?,
        };
        let morning = date.hour < NOON;

        Ok(Self {
            weekday,
            month,
            day: if fix_day && date.day < 10 {
                date.day.to_string()
            } else {
                format!("{:02}", date.day)
            },
            month_number: format!("{:02}", date.month),
            short_year: format!("{:02}", date.year.rem_euclid(100)),
            year: date.year.to_string(),
            marker_caps: locale.name_for(if morning { AM_CAPS_KEY } else { PM_CAPS_KEY })?,
            marker: locale.name_for(if morning { AM_KEY } else { PM_KEY })?,
        })
    }

    fn lookup(&self, token: char) -> Option<&str> {
        let text = match token {
            'a' | 'A' => &self.weekday,
            'b' | 'B' => &self.month,
            'd' => &self.day,
            'm' => &self.month_number,
            'y' => &self.short_year,
            'Y' => &self.year,
            'p' => &self.marker_caps,
            'P' => &self.marker,
            _ => return None,
        };
        Some(text.as_str())
    }

    /// Replaces Jalali tokens in a single left-to-right pass
    fn apply(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            if c != TOKEN_MARKER {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some(token) => match self.lookup(token) {
                    Some(text) => out.push_str(text),
                    None => {
                        out.push(TOKEN_MARKER);
                        out.push(token);
                    }
                },
                None => out.push(TOKEN_MARKER),
            }
        }
        out
    }
}

impl<'a, L: LocaleProvider, G: GregorianService> DateFormatter<'a, L, G> {
    /// Creates a formatter with the default configuration
    pub fn new(locale: &'a L, gregorian: &'a G) -> Self {
        Self {
            locale,
            gregorian,
            config: CalendarConfig::default(),
        }
    }

    /// Replaces the configuration
    #[must_use]
    pub fn with_config(mut self, config: CalendarConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration
    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Formats `time` (UTC seconds) as a Jalali date under `timezone`.
    ///
    /// An empty template falls back to the locale's `strftimedaydatetime`.
    /// `fix_day` and `fix_hour` are forwarded to the Gregorian formatter
    /// unchanged, after the site switch has been applied to `fix_day`.
    ///
    /// # Errors
    /// Returns `CalendarError::MissingTranslation` if any name the template
    /// could need is missing from the locale.
    pub fn format(
        &self,
        time: i64,
        template: &str,
        timezone: &str,
        fix_day: bool,
        fix_hour: bool,
    ) -> Result<String, CalendarError> {
        let template = if template.is_empty() {
            debug!("empty template, using locale default");
            self.locale.name_for(DEFAULT_TEMPLATE_KEY)?
        } else {
            template.to_owned()
        };
        let fix_day = self.config.effective_fix_day(fix_day);

        let array = timestamp_to_date_array(self.gregorian, time, timezone);
        let substituted = Substitutions::resolve(self.locale, &array, fix_day)?.apply(&template);
        trace!(%substituted, date = %array.date, "jalali tokens replaced");

        Ok(self
            .gregorian
            .format(time, &substituted, timezone, fix_day, fix_hour))
    }
}
