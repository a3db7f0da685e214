//! User-facing strings of the landing page.

pub const SEARCH_EMPTY: &str = "অনুগ্রহ করে সার্চ কীওয়ার্ড লিখুন।";
pub const SEARCH_BUSY_LABEL: &str = "খুঁজছি...";

pub const COPIED_LABEL: &str = "কপি করা হয়েছে!";
pub const COPY_LABEL: &str = "কপি করুন";
pub const COPY_HINT: &str = "ক্লিক করে কপি করুন";
pub const PAYMENT_NUMBER_COPIED: &str = "পেমেন্ট নম্বর কপি করা হয়েছে!";

pub const INSTRUCTIONS_EXPAND: &str = "বিস্তারিত দেখুন";
pub const INSTRUCTIONS_COLLAPSE: &str = "সরল দেখুন";

pub const ORDER_BUTTON: &str = "অর্ডার করুন";

pub const FORM_INCOMPLETE: &str = "অনুগ্রহ করে সব তথ্য পূরণ করুন।";
pub const ORDER_ACCEPTED: &str =
    "আপনার অর্ডারটি গ্রহণ করা হয়েছে! শীঘ্রই আমরা আপনার সাথে যোগাযোগ করব।";
pub const ACCOUNT_CREATED: &str =
    "আপনার অ্যাকাউন্ট তৈরি করা হয়েছে! যাচাইকরণের জন্য ইমেইল চেক করুন।";
pub const SIGNED_IN: &str = "সাইন ইন সফল! ড্যাশবোর্ডে রিডাইরেক্ট করা হচ্ছে...";

pub fn search_started(term: &str) -> String {
    format!("\"{}\" - এই কীওয়ার্ডে সার্চ করা হয়েছে!", term)
}

pub fn search_matched(term: &str, count: usize) -> String {
    format!("{}টি সার্ভিস পাওয়া গেছে \"{}\" এর জন্য", count, term)
}

pub fn search_no_match(term: &str) -> String {
    format!("দুঃখিত, \"{}\" এর জন্য কোন সার্ভিস পাওয়া যায়নি।", term)
}

pub fn page_loading(link_text: &str) -> String {
    format!("{} পেজ লোড হচ্ছে...", link_text)
}
