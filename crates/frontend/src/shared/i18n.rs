//! UI strings in both languages.

use contracts::domain::a003_review::aggregate::ReviewValidationError;
use contracts::shared::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Loading,
    PageNotFound,
    BusinessNotFound,
    LoadFailed,
    BackHome,

    // navigation
    Directories,
    Categories,
    SearchPlaceholder,
    SearchResultsFor,
    NoSearchResults,
    LanguageName,

    // listing
    All,
    LoadMore,
    NoBusinesses,
    Rating,
    AllRatings,
    Verification,
    AllBusinesses,
    Verified,
    Featured,
    VerifiedAndFeatured,
    SortBy,
    SortRating,
    SortNewest,
    SortViews,
    SortName,
    SortRelevance,
    SortDistance,

    // profile
    Premium,
    OpenNow,
    ClosedNow,
    Views,
    ReviewsCount,
    Call,
    WhatsApp,
    Website,
    Email,
    Share,
    LinkCopied,
    Follow,
    Following,
    Branches,
    WorkingHours,
    Closed,
    Faqs,
    ServicesTitle,
    ForSaleTitle,
    NoServices,
    NoMedia,
    Previous,
    Next,
    Close,

    // reviews
    Comments,
    NoReviews,
    WriteReview,
    YourRating,
    YourReview,
    AddImages,
    ImageUploadUnsupported,
    Submit,
    Submitting,
    Cancel,
    SelectRating,
    WriteComment,

    // lazy tab failures
    FailedServices,
    FailedMedia,
    FailedReviews,
    FailedSubmitReview,

    // login
    Login,
    Phone,
    Password,
    LoggingIn,
    LoginFailed,
    LoginRequired,
}

impl Msg {
    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Msg::Loading => ("Loading...", "جاري التحميل..."),
            Msg::PageNotFound => ("Page not found", "الصفحة غير موجودة"),
            Msg::BusinessNotFound => ("Business not found", "لم يتم العثور على النشاط التجاري"),
            Msg::LoadFailed => ("Something went wrong. Please try again.", "حدث خطأ ما. يرجى المحاولة مرة أخرى."),
            Msg::BackHome => ("Back to directories", "العودة إلى الأدلة"),

            Msg::Directories => ("Directories", "الأدلة"),
            Msg::Categories => ("Categories", "الفئات"),
            Msg::SearchPlaceholder => ("Search businesses...", "ابحث عن الأنشطة التجارية..."),
            Msg::SearchResultsFor => ("Search results for", "نتائج البحث عن"),
            Msg::NoSearchResults => ("No results found", "لا توجد نتائج"),
            Msg::LanguageName => ("English", "العربية"),

            Msg::All => ("All", "الكل"),
            Msg::LoadMore => ("Load more", "عرض المزيد"),
            Msg::NoBusinesses => ("No businesses found", "لا توجد أنشطة تجارية"),
            Msg::Rating => ("Rating", "التقييم"),
            Msg::AllRatings => ("All ratings", "جميع التقييمات"),
            Msg::Verification => ("Type", "النوع"),
            Msg::AllBusinesses => ("All businesses", "جميع الأنشطة"),
            Msg::Verified => ("Verified", "موثق"),
            Msg::Featured => ("Featured", "مميز"),
            Msg::VerifiedAndFeatured => ("Verified & featured", "موثق ومميز"),
            Msg::SortBy => ("Sort by", "ترتيب حسب"),
            Msg::SortRating => ("Highest rated", "الأعلى تقييمًا"),
            Msg::SortNewest => ("Newest", "الأحدث"),
            Msg::SortViews => ("Most viewed", "الأكثر مشاهدة"),
            Msg::SortName => ("Name", "الاسم"),
            Msg::SortRelevance => ("Most relevant", "الأكثر صلة"),
            Msg::SortDistance => ("Nearest", "الأقرب"),

            Msg::Premium => ("Premium", "بريميوم"),
            Msg::OpenNow => ("Open now", "مفتوح الآن"),
            Msg::ClosedNow => ("Closed now", "مغلق الآن"),
            Msg::Views => ("views", "مشاهدة"),
            Msg::ReviewsCount => ("reviews", "تقييم"),
            Msg::Call => ("Call", "اتصال"),
            Msg::WhatsApp => ("WhatsApp", "واتساب"),
            Msg::Website => ("Website", "الموقع الإلكتروني"),
            Msg::Email => ("Email", "البريد الإلكتروني"),
            Msg::Share => ("Share", "مشاركة"),
            Msg::LinkCopied => ("Link copied", "تم نسخ الرابط"),
            Msg::Follow => ("Follow", "متابعة"),
            Msg::Following => ("Following", "تتم المتابعة"),
            Msg::Branches => ("Branches", "الفروع"),
            Msg::WorkingHours => ("Working hours", "ساعات العمل"),
            Msg::Closed => ("Closed", "مغلق"),
            Msg::Faqs => ("Frequently asked questions", "الأسئلة الشائعة"),
            Msg::ServicesTitle => ("Services", "الخدمات"),
            Msg::ForSaleTitle => ("For sale", "معروض للبيع"),
            Msg::NoServices => ("No services available", "لا توجد خدمات متاحة"),
            Msg::NoMedia => ("No photos or videos yet", "لا توجد صور أو فيديوهات بعد"),
            Msg::Previous => ("Previous", "السابق"),
            Msg::Next => ("Next", "التالي"),
            Msg::Close => ("Close", "إغلاق"),

            Msg::Comments => ("Comments", "التعليقات"),
            Msg::NoReviews => ("No reviews yet", "لا توجد تقييمات بعد"),
            Msg::WriteReview => ("Write a review", "اكتب تقييمًا"),
            Msg::YourRating => ("Your rating", "تقييمك"),
            Msg::YourReview => ("Your review", "تعليقك"),
            Msg::AddImages => ("Add images", "إضافة صور"),
            Msg::ImageUploadUnsupported => ("Image upload not yet supported", "رفع الصور غير مدعوم حاليًا"),
            Msg::Submit => ("Submit", "إرسال"),
            Msg::Submitting => ("Submitting...", "جاري الإرسال..."),
            Msg::Cancel => ("Cancel", "إلغاء"),
            Msg::SelectRating => ("Please select a rating", "يرجى اختيار التقييم"),
            Msg::WriteComment => ("Please write a comment", "يرجى كتابة تعليق"),

            Msg::FailedServices => ("Failed to load services", "فشل في تحميل الخدمات"),
            Msg::FailedMedia => ("Failed to load media", "فشل في تحميل الوسائط"),
            Msg::FailedReviews => ("Failed to load reviews", "فشل في تحميل التقييمات"),
            Msg::FailedSubmitReview => ("Failed to submit review", "فشل في إرسال التقييم"),

            Msg::Login => ("Login", "تسجيل الدخول"),
            Msg::Phone => ("Phone number", "رقم الهاتف"),
            Msg::Password => ("Password", "كلمة المرور"),
            Msg::LoggingIn => ("Logging in...", "جاري تسجيل الدخول..."),
            Msg::LoginFailed => (
                "Login failed. Please check your phone number and password",
                "فشل تسجيل الدخول. تحقق من رقم الهاتف وكلمة المرور",
            ),
            Msg::LoginRequired => ("Please enter your phone number and password", "يرجى إدخال رقم الهاتف وكلمة المرور"),
        }
    }

    pub fn text(self, locale: Locale) -> &'static str {
        let (en, ar) = self.pair();
        locale.pick(en, ar)
    }
}

impl From<ReviewValidationError> for Msg {
    fn from(err: ReviewValidationError) -> Self {
        match err {
            ReviewValidationError::MissingRating => Msg::SelectRating,
            ReviewValidationError::EmptyComment => Msg::WriteComment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_by_locale() {
        assert_eq!(Msg::FailedReviews.text(Locale::En), "Failed to load reviews");
        assert_eq!(Msg::FailedReviews.text(Locale::Ar), "فشل في تحميل التقييمات");
    }

    #[test]
    fn test_validation_messages_match_english() {
        for err in [
            ReviewValidationError::MissingRating,
            ReviewValidationError::EmptyComment,
        ] {
            assert_eq!(Msg::from(err).text(Locale::En), err.to_string());
        }
    }
}
