use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-6 py-2 bg-blue-500 \
    dark:bg-blue-600 hover:bg-blue-600 hover:dark:bg-blue-700 text-white \
    rounded min-w-[100px]";

pub const BUTTON_DELETE_STYLE: &str = "text-red-500 hover:text-red-700 \
    dark:text-red-400 dark:hover:text-red-300 bg-transparent border-none \
    cursor-pointer";

// Form styles
pub const FORM_TEXT_INPUT_STYLE: &str = "flex-1 min-w-[120px] p-2 rounded text-sm \
    text-gray-900 dark:text-white bg-gray-50 dark:bg-gray-700 border \
    border-gray-300 dark:border-gray-600 dark:placeholder-gray-400 \
    focus:ring-blue-600 focus:border-blue-600";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "min-h-screen flex flex-col items-center \
    justify-center px-6 py-8 text-gray-900 dark:text-white";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }

                script src="https://cdn.tailwindcss.com" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body class="container max-w-full min-h-screen bg-yellow-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// numfmt switches to scientific notation for values at or above this.
const SCIENTIFIC_NOTATION_CUTOFF: f64 = 1_000_000_000_000.0;

/// Format `number` as dollars and cents, e.g. "$1,234.50" or "-$400.00".
///
/// The number is rounded to the nearest cent first, so amounts that round to
/// zero are shown as "$0.00".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .ok()
            .map(|fmt| fmt.precision(Precision::Decimals(2)))
    });

    static NEGATIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .ok()
            .map(|fmt| fmt.precision(Precision::Decimals(2)))
    });

    let (Some(positive_fmt), Some(negative_fmt)) = (positive_fmt, negative_fmt) else {
        return format!("{number:.2}");
    };

    let number = (number * 100.0).round() / 100.0;
    let (prefix, formatter) = if number < 0.0 {
        ("-$", negative_fmt)
    } else {
        ("$", positive_fmt)
    };
    let magnitude = number.abs();

    if magnitude == 0.0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    }

    if magnitude >= SCIENTIFIC_NOTATION_CUTOFF {
        return format!("{prefix}{}", group_thousands(&format!("{magnitude:.2}")));
    }

    let mut formatted_string = formatter.fmt_string(magnitude);

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    let bytes = formatted_string.as_bytes();
    if bytes.len() >= 3 && bytes[bytes.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// Insert a comma between every group of three digits before the decimal point.
fn group_thousands(number: &str) -> String {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));

    let mut grouped = String::with_capacity(number.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::{format_currency, group_thousands};

    #[test]
    fn zero_has_two_decimal_places() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn sign_prefixes_dollar_sign() {
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(-400.0), "-$400.00");
    }

    #[test]
    fn pads_single_decimal_place() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
    }

    #[test]
    fn amounts_below_a_cent_are_zero() {
        assert_eq!(format_currency(0.001), "$0.00");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(1e-7), "$0.00");
    }

    #[test]
    fn float_error_in_savings_is_zero() {
        let savings = 0.3 - (0.1 + 0.2);
        assert!(savings != 0.0);

        assert_eq!(format_currency(savings), "$0.00");
        assert_eq!(format_currency(-5.55e-17), "$0.00");
    }

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn large_amounts_are_not_in_scientific_notation() {
        assert_eq!(format_currency(1e15), "$1,000,000,000,000,000.00");
        assert_eq!(format_currency(-1e12), "-$1,000,000,000,000.00");
    }

    #[test]
    fn groups_digits_before_decimal_point() {
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
        assert_eq!(group_thousands("123.40"), "123.40");
        assert_eq!(group_thousands("1000"), "1,000");
    }
}
