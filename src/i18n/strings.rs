//! Localized site strings.
//!
//! Each locale is a `const Dictionary`, so a missing field is a compile
//! error. The serialized (camelCase) tree backs dot-path lookups such as
//! `"details.dressCode"` or `"faq.items.0.question"`.

use crate::i18n::Locale;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

/// All localized user-facing strings for a locale
#[derive(Debug, Clone, Serialize)]
pub struct Dictionary {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub countdown: CountdownStrings,
    pub details: DetailsStrings,
    pub timeline: TimelineStrings,
    pub venue: VenueStrings,
    pub faq: FaqStrings,
    pub rsvp: RsvpStrings,
    pub footer: FooterStrings,
    pub music: MusicStrings,
    pub switcher: SwitcherStrings,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavStrings {
    pub home: &'static str,
    pub details: &'static str,
    pub timeline: &'static str,
    pub venue: &'static str,
    pub faq: &'static str,
    pub rsvp: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStrings {
    pub wedding_of: &'static str,
    pub save_the_date: &'static str,
    pub scroll_down: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountdownStrings {
    pub days: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub ceremony: &'static str,
    pub reception: &'static str,
    pub dress_code: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub events: TimelineEventStrings,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEventStrings {
    pub ceremony: TitledText,
    pub cocktail: TitledText,
    pub dinner: TitledText,
    pub first_dance: TitledText,
    pub party: TitledText,
}

#[derive(Debug, Clone, Serialize)]
pub struct TitledText {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub get_directions: &'static str,
    pub open_in_maps: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [FaqItem],
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RsvpStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: RsvpFormStrings,
    pub success: RsvpSuccessStrings,
    pub error: RsvpErrorStrings,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpFormStrings {
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub email: &'static str,
    pub email_placeholder: &'static str,
    pub attending: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub guests: &'static str,
    pub dietary: &'static str,
    pub dietary_placeholder: &'static str,
    pub message: &'static str,
    pub message_placeholder: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RsvpSuccessStrings {
    pub title: &'static str,
    pub message: &'static str,
    pub declined: &'static str,
}

/// Shown when the email service rejects or times out. Retrying is manual.
#[derive(Debug, Clone, Serialize)]
pub struct RsvpErrorStrings {
    pub title: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterStrings {
    pub thank_you: &'static str,
    pub made_with: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicStrings {
    pub click_to_play: &'static str,
    pub now_playing: &'static str,
}

/// Language switcher button. Labels name the *other* locale.
#[derive(Debug, Clone, Serialize)]
pub struct SwitcherStrings {
    pub label: &'static str,
    pub aria: &'static str,
}

// ==================== English Strings ====================

const ENGLISH_FAQ: &[FaqItem] = &[
    FaqItem {
        question: "What time should guests arrive?",
        answer: "We kindly ask that all guests arrive by 3:45 PM to be seated before the ceremony begins at 4:00 PM.",
    },
    FaqItem {
        question: "Is there parking available?",
        answer: "Yes! Parking will be available at the venue.",
    },
    FaqItem {
        question: "Can I bring a plus one?",
        answer: "Due to venue capacity, we are only able to accommodate those guests formally invited.",
    },
    FaqItem {
        question: "What is the dress code?",
        answer: "We request formal attire for our celebration or traditional clothes.",
    },
    FaqItem {
        question: "Will the ceremony be indoors or outdoors?",
        answer: "The ceremony will be held outdoors in the garden. We have an indoor backup in case of weather.",
    },
    FaqItem {
        question: "Are children welcome?",
        answer: "Our wedding is an adults-only celebration to give everyone a chance to relax and enjoy. This rule does not apply to Aida",
    },
    FaqItem {
        question: "What if I have dietary restrictions?",
        answer: "Please let us know in your RSVP, and our catering team will accommodate your needs.",
    },
    FaqItem {
        question: "Can I take photos during the ceremony?",
        answer: "We kindly ask for an unplugged ceremony. Feel free to take photos during the reception!",
    },
];

/// English site strings (default locale)
pub const ENGLISH_STRINGS: Dictionary = Dictionary {
    nav: NavStrings {
        home: "Home",
        details: "Details",
        timeline: "Timeline",
        venue: "Venue",
        faq: "FAQ",
        rsvp: "RSVP",
    },
    hero: HeroStrings {
        wedding_of: "The Wedding of",
        save_the_date: "Save the Date",
        scroll_down: "Scroll to discover our story",
    },
    countdown: CountdownStrings {
        days: "Days",
        hours: "Hours",
        minutes: "Minutes",
        seconds: "Seconds",
    },
    details: DetailsStrings {
        title: "Wedding Details",
        subtitle: "Join us for our special day",
        ceremony: "The Ceremony",
        reception: "The Reception",
        dress_code: "Dress Code",
    },
    timeline: TimelineStrings {
        title: "Our Day",
        subtitle: "A timeline of celebrations",
        events: TimelineEventStrings {
            ceremony: TitledText {
                title: "Ceremony",
                description: "Celebrate our union with us in a beautiful garden setting",
            },
            cocktail: TitledText {
                title: "Cocktail Hour",
                description: "Enjoy welcome drinks",
            },
            dinner: TitledText {
                title: "Dinner",
                description: "Savor a delicious farm-to-table feast",
            },
            first_dance: TitledText {
                title: "First Dance",
                description: "Our first dance as a married couple",
            },
            party: TitledText {
                title: "Party",
                description: "Party time...",
            },
        },
    },
    venue: VenueStrings {
        title: "The Venue",
        subtitle: "Where we'll celebrate",
        get_directions: "Get Directions",
        open_in_maps: "Open in Maps",
        description: "Resting along Morocco’s Atlantic coast, Oualidia is a hidden gem where a peaceful lagoon meets the open sea. Surrounded by natural beauty and infused with the soul of Moroccan coastal life, this serene haven offers a timeless setting to celebrate love, unity, and joy.",
    },
    faq: FaqStrings {
        title: "Questions & Answers",
        subtitle: "Everything you need to know",
        items: ENGLISH_FAQ,
    },
    rsvp: RsvpStrings {
        title: "RSVP",
        subtitle: "We hope you can celebrate with us",
        form: RsvpFormStrings {
            name: "Full Name",
            name_placeholder: "Enter your full name",
            email: "Email Address",
            email_placeholder: "Enter your email",
            attending: "Will you be attending?",
            yes: "Joyfully Accept",
            no: "Regretfully Decline",
            guests: "Number of Guests",
            dietary: "Dietary Restrictions",
            dietary_placeholder: "Please list any allergies or dietary requirements",
            message: "Message for the Couple",
            message_placeholder: "Share your wishes or any notes...",
            submit: "Send RSVP",
            submitting: "Sending...",
        },
        success: RsvpSuccessStrings {
            title: "Thank You!",
            message: "Your RSVP has been received. We can't wait to celebrate with you!",
            declined: "We're sorry you can't make it, but thank you for letting us know.",
        },
        error: RsvpErrorStrings {
            title: "Error",
            message: "Failed to send RSVP. Please try again.",
        },
    },
    footer: FooterStrings {
        thank_you: "Thank You for Being Part of Our Story",
        made_with: "Made with love for our special day",
    },
    music: MusicStrings {
        click_to_play: "Click to Play Music",
        now_playing: "Now Playing",
    },
    switcher: SwitcherStrings {
        label: "العربية",
        aria: "Switch to Arabic",
    },
};

// ==================== Arabic Strings ====================

const ARABIC_FAQ: &[FaqItem] = &[
    FaqItem {
        question: "ما هو الوقت المناسب لوصول الضيوف؟",
        answer: "نرجو من جميع الضيوف الوصول بحلول الساعة 3:45 مساءً للجلوس قبل بدء المراسم في الساعة 4:00 مساءً.",
    },
    FaqItem {
        question: "هل يتوفر موقف سيارات؟",
        answer: "نعم! ستتوفر خدمة صف السيارات المجانية في المكان.",
    },
    FaqItem {
        question: "هل يمكنني إحضار مرافق؟",
        answer: "نظراً لسعة المكان، يمكننا فقط استضافة الضيوف المدعوين رسمياً.",
    },
    FaqItem {
        question: "ما هو قواعد اللباس؟",
        answer: "نطلب ارتداء الملابس الرسمية. للسيدات فساتين أنيقة، وللرجال بدلات رسمية.",
    },
    FaqItem {
        question: "هل ستقام المراسم في الداخل أم الخارج؟",
        answer: "ستقام المراسم في الهواء الطلق في الحديقة. لدينا مكان بديل داخلي في حالة سوء الطقس.",
    },
    FaqItem {
        question: "هل الأطفال مرحب بهم؟",
        answer: "حفل زفافنا مخصص للبالغين فقط لمنح الجميع فرصة للاسترخاء والاستمتاع.",
    },
    FaqItem {
        question: "ماذا لو كان لدي قيود غذائية؟",
        answer: "يرجى إبلاغنا في تأكيد الحضور، وسيقوم فريق التقديم بتلبية احتياجاتكم.",
    },
    FaqItem {
        question: "هل يمكنني التقاط صور أثناء المراسم؟",
        answer: "نرجو عدم استخدام الهواتف أثناء المراسم. يمكنكم التقاط الصور خلال حفل الاستقبال!",
    },
];

/// Arabic site strings (right-to-left)
pub const ARABIC_STRINGS: Dictionary = Dictionary {
    nav: NavStrings {
        home: "الرئيسية",
        details: "التفاصيل",
        timeline: "البرنامج",
        venue: "المكان",
        faq: "الأسئلة",
        rsvp: "تأكيد الحضور",
    },
    hero: HeroStrings {
        wedding_of: "حفل زفاف",
        save_the_date: "احفظ الموعد",
        scroll_down: "مرر للأسفل لاكتشاف قصتنا",
    },
    countdown: CountdownStrings {
        days: "أيام",
        hours: "ساعات",
        minutes: "دقائق",
        seconds: "ثواني",
    },
    details: DetailsStrings {
        title: "تفاصيل الزفاف",
        subtitle: "انضموا إلينا في يومنا المميز",
        ceremony: "مراسم الزفاف",
        reception: "حفل الاستقبال",
        dress_code: "قواعد اللباس",
    },
    timeline: TimelineStrings {
        title: "برنامج اليوم",
        subtitle: "جدول الاحتفالات",
        events: TimelineEventStrings {
            ceremony: TitledText {
                title: "مراسم الزفاف",
                description: "استقبال الضيوف",
            },
            cocktail: TitledText {
                title: "المشروبات الترحيبية",
                description: "استمتعوا بالمقبلات والمشروبات الترحيبية",
            },
            dinner: TitledText {
                title: "العشاء",
                description: "تذوقوا وليمة شهية",
            },
            first_dance: TitledText {
                title: "النشاط",
                description: "الاستمتاع بأجواء الفرح",
            },
            party: TitledText {
                title: "الحفلة",
                description: "-",
            },
        },
    },
    venue: VenueStrings {
        title: "مكان الحفل",
        subtitle: "حيث سنحتفل",
        get_directions: "احصل على الاتجاهات",
        open_in_maps: "افتح في الخرائط",
        description: "على ضفاف الساحل الأطلسي للمغرب، تتجلى الوليدية كجوهرة مخفية، حيث تعانق البحيرة الهادئة زرقة المحيط. وبين أحضان الطبيعة وروح الساحل المغربي الأصيل، تنسج هذه الواحة الهادئة أجواءً خالدة للاحتفال بالحب والانسجام والفرح.",
    },
    faq: FaqStrings {
        title: "الأسئلة والأجوبة",
        subtitle: "كل ما تحتاج معرفته",
        items: ARABIC_FAQ,
    },
    rsvp: RsvpStrings {
        title: "تأكيد الحضور",
        subtitle: "نأمل أن تحتفلوا معنا",
        form: RsvpFormStrings {
            name: "الاسم الكامل",
            name_placeholder: "أدخل اسمك الكامل",
            email: "البريد الإلكتروني",
            email_placeholder: "أدخل بريدك الإلكتروني",
            attending: "هل ستحضر؟",
            yes: "نعم، بكل سرور",
            no: "للأسف، لا أستطيع",
            guests: "عدد الضيوف",
            dietary: "القيود الغذائية",
            dietary_placeholder: "يرجى ذكر أي حساسية أو متطلبات غذائية",
            message: "رسالة للعروسين",
            message_placeholder: "شاركنا أمنياتك أو أي ملاحظات...",
            submit: "إرسال التأكيد",
            submitting: "جاري الإرسال...",
        },
        success: RsvpSuccessStrings {
            title: "شكراً لك!",
            message: "تم استلام تأكيد حضورك. لا نستطيع الانتظار للاحتفال معك!",
            declined: "نأسف لعدم قدرتك على الحضور، لكن شكراً لإعلامنا.",
        },
        error: RsvpErrorStrings {
            title: "خطأ",
            message: "تعذر إرسال التأكيد. يرجى المحاولة مرة أخرى.",
        },
    },
    footer: FooterStrings {
        thank_you: "شكراً لكونكم جزءاً من قصتنا",
        made_with: "صُنع بحب ليومنا المميز",
    },
    music: MusicStrings {
        click_to_play: "اضغط لتشغيل الموسيقى",
        now_playing: "يعمل الآن",
    },
    switcher: SwitcherStrings {
        label: "English",
        aria: "التبديل إلى الإنجليزية",
    },
};

/// Typed dictionary for a locale.
pub fn dictionary(locale: Locale) -> &'static Dictionary {
    match locale {
        Locale::English => &ENGLISH_STRINGS,
        Locale::Arabic => &ARABIC_STRINGS,
    }
}

static ENGLISH_TREE: OnceLock<Value> = OnceLock::new();
static ARABIC_TREE: OnceLock<Value> = OnceLock::new();

/// Serialized dictionary tree for dot-path traversal, built once per locale.
pub fn dictionary_tree(locale: Locale) -> &'static Value {
    let cell = match locale {
        Locale::English => &ENGLISH_TREE,
        Locale::Arabic => &ARABIC_TREE,
    };
    cell.get_or_init(|| serde_json::to_value(dictionary(locale)).unwrap_or(Value::Null))
}
