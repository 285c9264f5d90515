//! Bilingual group tables, one per [`crate::Category`].
//!
//! Every group carries an English and an Arabic label plus the free-text
//! answers seen in the survey files for that code. Order matters only for
//! ties between equally long aliases: earlier groups win.

#![allow(clippy::too_many_lines)]

use crate::category::Group;

macro_rules! group {
    ($code:literal, $en:literal, $ar:literal $(, $alias:literal)* $(,)?) => {
        Group {
            code: $code,
            en: $en,
            ar: $ar,
            aliases: &[$($alias),*],
        }
    };
}

/// Villages of the Chouf district, Mount Lebanon and the Beqaa valley.
pub static VILLAGES: &[Group] = &[
    // Chouf
    group!("barouk", "Barouk", "الباروك", "Al-Barouk", "Baroque", "باروك"),
    group!("ain_wazin", "Ain W Zain", "عين وزين", "Ain Wazin", "Ain Wzein", "عين وزّين"),
    group!("ammatour", "Ammatour", "عماطور", "Amatur", "Ammatur"),
    group!("beit_eddine", "Beit Eddine", "بيت الدين", "Beiteddine", "Beit ed-Dine"),
    group!("btalloun", "Btalloun", "بتلون", "Batloun", "Btaloun"),
    group!("mokhtara", "Al-Mokhtara", "المختارة", "Mokhtara", "Mukhtara", "مختاره", "المختاره"),
    group!("deir_el_qamar", "Deir El Qamar", "دير القمر", "Deir el-Qamar", "Deir Al Qamar"),
    group!(
        "chawalik_deir_el_qamar",
        "Chawalik Deir El Qamar",
        "شواليق دير القمر",
        "Shawaliq Deir El Qamar",
    ),
    group!("barja", "Barja", "برجا"),
    group!("kfarhaym", "Kfarhaym", "كفرحيم", "Kafarheim", "Kfarhim"),
    group!("ain_qani", "Ain Qani", "عين قاني", "Ain Kani", "عين قني"),
    group!("qobaiyat", "Qobaiyat", "القبيات", "Qoubaiyat"),
    group!("bireh", "Al-Bireh", "البيرة", "Bireh", "البيره"),
    group!("jahiliyeh", "Al-Jahiliyeh", "الجاهلية", "Jahlieh", "الجاهليه"),
    group!("damour", "Damour", "الدامور", "Ad-Damour"),
    group!("debbiyeh", "Al-Debbiyeh", "الدبية", "Dibbiyeh", "الدبيه"),
    group!("saadiyat", "Al-Saadiyat", "السعديات", "Saadiyat"),
    group!("simqaniyeh", "Al-Simqaniyeh", "السمقانية", "Semqaniyeh", "السمقانيه"),
    group!(
        "kahlouniyeh",
        "Al-Kahlouniyeh",
        "الكحلونية",
        "Kahlouniyeh",
        "الكحلونيه",
        "كحلونية الشوف",
        "كحلونيه الشوف",
        "Kahlouniyeh El Chouf",
    ),
    group!("moshref", "Al-Moshref", "المشرف", "Mechref"),
    group!("mtalleh", "Al-Mtalleh", "المطلة", "Mtalleh", "المطله"),
    group!("mughayziyeh", "Al-Mughayziyeh", "المغيزية", "Mghaiyrieh", "المغيزيه"),
    group!(
        "warhaniyeh",
        "Al-Warhaniyeh",
        "الورهانية",
        "Warhaniyeh",
        "الورهانيه",
        "ورهانيه",
        "ورهانية",
    ),
    group!("bater", "Bater", "باتر"),
    group!("breih", "Breih", "بريح", "Breih El Chouf", "بريح الشوف"),
    group!("bshtfine", "Bshtfine", "بشتفين", "Bchetfine"),
    group!("btameh", "Btameh", "بطمة", "بطمه"),
    group!("baatharan", "Baatharan", "بعذران", "Baadarane"),
    group!("baaqline", "Baaqline", "بعقلين", "Baakline"),
    group!("bkifa", "Bkifa", "بكيفا"),
    group!("jadideh_el_chouf", "Jadideh El Chouf", "جديدة الشوف", "جديده الشوف"),
    group!(
        "haret_jandal_el_chouf",
        "Haret Jandal El Chouf",
        "حارة جندل الشوف",
        "حاره جندل الشوف",
    ),
    group!("khirbet_bosri", "Khirbet Bosri", "خربة بسري", "خربه بسري"),
    group!("khraybeh_el_chouf", "Khraybeh El Chouf", "خريبة الشوف", "خريبه الشوف"),
    group!("daraya_el_chouf", "Daraya El Chouf", "داريا الشوف"),
    group!("dmit_el_chouf", "Dmit El Chouf", "دميت الشوف", "Dmit"),
    group!("deir_dourit", "Deir Dourit", "دير دوريت", "ديردوريت"),
    group!("deir_baba", "Deir Baba", "ديربابا", "ديربآبا"),
    group!("charoun", "Charoun", "شارون", "Sharoun"),
    group!("chahim", "Chahim", "شحيم", "Chehim"),
    group!("aanout", "Aanout", "عانوت"),
    group!("atrine", "Atrine", "عترين"),
    group!("aalman", "Aalman", "علمان"),
    group!("ain_zahlta", "Ain Zahlta", "عين زحلتا"),
    group!("gharifeh", "Gharifeh", "غريفة", "غريفه"),
    group!("ktermaya", "Ktermaya El Chouf", "كترمايا الشوف", "Ketermaya", "كترمايا"),
    group!(
        "kfarfakoud",
        "Kfarfakoud",
        "كفرفاقود",
        "Kfarfakoud El Chouf",
        "كفرفاقود الشوف",
    ),
    group!("kfarnabrakh", "Kfarnabrakh", "كفرنبرخ"),
    group!("majdel_el_meouch", "Majdel El Meouch", "مجدل المعوش", "Majdel Meouch"),
    group!("mrosti", "Mrosti", "مرستي", "مرستى"),
    group!("mazboud", "Mazboud", "مزبود"),
    group!(
        "mazraat_el_chouf",
        "Mazraat El Chouf",
        "مزرعة الشوف",
        "مزرعه الشوف",
        "مزرعةالشوف",
        "مزرعهالشوف",
    ),
    group!("mazmoura", "Mazmoura", "مزمورة", "مزموره"),
    group!("maaser_el_chouf", "Maaser El Chouf", "معاصر الشوف", "Maasser El Chouf"),
    group!("niha_el_chouf", "Niha El Chouf", "نيحا الشوف"),
    // Beqaa
    group!("fakiha", "Al-Fakiha", "الفاكهة", "Fakiha", "Al Fekha"),
    group!("labweh", "Al-Labweh", "اللبوة", "Labweh"),
    group!("tarbol", "Tarbol", "تربل"),
    group!("haret_al_faykani", "Haret Al-Faykani", "حارة الفيكاني", "حارة الفيكانى"),
    group!("dalhamieh", "Dalhamieh", "دلهامية", "دلهاميه"),
    group!("rayak", "Rayak", "رياق", "Riyaq"),
    group!("zahle", "Zahle", "زحلة", "Zahleh", "زحله"),
    group!("ali_al_nahri", "Ali Al-Nahri", "علي النهري", "Ali En Nahri"),
    group!("masma", "Masma", "ماسما"),
    group!("machghara", "Machghara", "مشغرة", "Mashghara", "مشغره"),
    group!("nabi_chit", "Nabi Chit", "نبي شيت", "Nabi Sheet", "النبي شيت"),
];

/// Individual crops, also used for two-crop answers split into segments.
pub static CROPS: &[Group] = &[
    group!("wheat", "Wheat", "قمح", "حنطة", "برّ"),
    group!("barley", "Barley", "شعير"),
    group!("corn", "Corn/Maize", "ذرة", "corn", "maize", "ذره"),
    group!("tomato", "Tomato", "طماطم", "بندورة", "طماطة", "Tomatoes"),
    group!("cucumber", "Cucumber", "خيار", "قثاء", "Cucumbers"),
    group!("olive", "Olive", "زيتون", "Olives"),
    group!("grape", "Grapes", "عنب", "كرمة", "Grape", "Vineyard"),
    group!("apple", "Apple", "تفاح", "Apples"),
    group!("peach", "Peach", "دراق", "خوخ", "Peaches"),
    group!("cherry", "Cherry", "كرز", "Cherries"),
    group!("potato", "Potato", "بطاطا", "بطاطس", "Potatoes"),
    group!(
        "citrus",
        "Citrus fruits",
        "حمضيات",
        "citrus",
        "برتقال",
        "orange",
        "ليمون",
        "lemon",
        "جريب فروت",
    ),
    group!("vegetables", "Mixed vegetables", "خضروات متنوعة", "خضروات", "vegetables", "خضار"),
    group!(
        "legumes",
        "Legumes",
        "بقوليات",
        "فول",
        "beans",
        "عدس",
        "lentils",
        "حمص",
        "chickpeas",
    ),
    group!(
        "other_crops",
        "Other crops",
        "محاصيل أخرى",
        "other",
        "أخرى",
        "various",
        "غير محدد",
        "unknown",
        "لا أعرف",
    ),
];

pub static IRRIGATION_FREQUENCY: &[Group] = &[
    group!("daily", "Daily irrigation", "ري يومي", "يومي", "daily", "كل يوم", "everyday", "يوميا"),
    group!(
        "weekly",
        "Weekly irrigation",
        "ري أسبوعي",
        "أسبوعي",
        "weekly",
        "كل أسبوع",
        "أسبوعيا",
        "مرة في الأسبوع",
        "once a week",
    ),
    group!(
        "bi_weekly",
        "Bi-weekly irrigation",
        "ري كل أسبوعين",
        "أسبوعين",
        "bi-weekly",
        "every two weeks",
        "مرتين في الشهر",
    ),
    group!(
        "monthly",
        "Monthly irrigation",
        "ري شهري",
        "شهري",
        "monthly",
        "كل شهر",
        "شهريا",
        "مرة في الشهر",
    ),
    group!("seasonal", "Seasonal irrigation", "ري موسمي", "موسمي", "seasonal", "حسب الموسم", "فصلي"),
    group!(
        "irregular",
        "Irregular irrigation",
        "ري غير منتظم",
        "غير منتظم",
        "irregular",
        "متقطع",
        "حسب الحاجة",
        "as needed",
    ),
    group!(
        "other_frequency",
        "Other/Unknown",
        "أخرى/غير محدد",
        "other",
        "أخرى",
        "unknown",
        "غير محدد",
        "لا أعرف",
    ),
];

pub static WATER_SOURCES: &[Group] = &[
    group!(
        "well",
        "Well water",
        "مياه الآبار",
        "well",
        "wells",
        "groundwater",
        "بئر",
        "آبار",
        "المياه الجوفية",
        "مياه جوفية",
        "بئر ارتوازي",
        "artesian well",
    ),
    group!(
        "spring",
        "Spring water",
        "مياه الينابيع",
        "spring",
        "نبع",
        "عين ماء",
        "ينبوع",
        "ينابيع",
        "عيون مياه",
        "مياه العيون",
    ),
    group!(
        "river",
        "River/Stream",
        "مياه الأنهار",
        "river",
        "stream",
        "نهر",
        "أنهار",
        "مجرى مائي",
        "وادي",
        "مياه الوادي",
    ),
    group!(
        "rainwater",
        "Rainwater",
        "مياه الأمطار",
        "rain",
        "rainwater harvesting",
        "أمطار",
        "مياه المطر",
        "حصاد المطر",
    ),
    group!(
        "tank",
        "Tank/Storage",
        "خزانات المياه",
        "tank",
        "cistern",
        "خزان",
        "خزانات",
        "صهريج",
        "برك تخزين",
    ),
    group!(
        "network",
        "Network/Municipal",
        "شبكة المياه العامة",
        "network",
        "municipal",
        "public network",
        "شبكة",
        "مياه الشبكة",
        "بلدية",
        "مياه البلدية",
    ),
    group!(
        "irrigation_canal",
        "Irrigation canal",
        "قناة ري",
        "canal",
        "irrigation project",
        "قناة",
        "مشروع ري",
    ),
    group!(
        "other_source",
        "Other/Unknown",
        "أخرى/غير محدد",
        "other",
        "unknown",
        "أخرى",
        "غير محدد",
        "غير معروف",
        "لا أعرف",
    ),
];

pub static WATER_SUFFICIENCY: &[Group] = &[
    group!(
        "sufficient",
        "Sufficient",
        "كافي",
        "كافية",
        "enough",
        "available",
        "جيد",
        "جيدة",
        "متوفر",
        "متوفرة",
        "وافر",
        "مناسب",
        "مناسبة",
    ),
    group!(
        "insufficient",
        "Insufficient",
        "غير كافي",
        "غير كافية",
        "not sufficient",
        "not enough",
        "shortage",
        "scarce",
        "نقص",
        "قليل",
        "قليلة",
        "ضعيف",
        "ضعيفة",
        "محدود",
        "محدودة",
    ),
    group!(
        "seasonal",
        "Seasonal",
        "موسمي",
        "موسمية",
        "variable",
        "depends on season",
        "متغير",
        "متغيرة",
        "حسب الموسم",
        "يختلف",
        "متقلب",
        "غير منتظم",
    ),
];

pub static ENERGY_SOURCES: &[Group] = &[
    group!(
        "solar",
        "Solar power",
        "طاقة شمسية",
        "solar",
        "solar panels",
        "شمس",
        "الشمس",
        "شمسي",
        "ألواح شمسية",
        "الطاقة الشمسية",
    ),
    group!(
        "generator",
        "Diesel/Generator",
        "ديزل/مولد",
        "generator",
        "diesel",
        "ديزل",
        "مولد",
        "مازوت",
        "مولدات",
        "مولد كهربائي",
    ),
    group!(
        "public_grid",
        "Electrical grid",
        "الشبكة الكهربائية",
        "grid",
        "public grid",
        "electricity",
        "EDL",
        "شبكة",
        "شبكة كهرباء",
        "كهرباء الدولة",
        "كهرباء عامة",
        "الشبكة العامة",
    ),
    group!(
        "battery",
        "Battery storage",
        "بطاريات",
        "battery",
        "batteries",
        "بطارية",
        "مراكم",
    ),
    group!("wind", "Wind power", "طاقة الرياح", "wind", "رياح", "توربين رياح"),
    group!(
        "hybrid",
        "Hybrid/Mixed",
        "مختلط/متنوع",
        "hybrid",
        "mixed",
        "مختلط",
        "متنوع",
        "أكثر من مصدر",
    ),
    group!(
        "other_energy",
        "Other/Unknown",
        "أخرى/غير محدد",
        "other",
        "unknown",
        "أخرى",
        "غير محدد",
        "لا أعرف",
    ),
];

pub static PRODUCTION_LEVELS: &[Group] = &[
    group!(
        "high",
        "High production",
        "إنتاج عالي",
        "high",
        "very good",
        "عالي",
        "عالية",
        "مرتفع",
        "مرتفعة",
        "ممتاز",
        "ممتازة",
        "كبير",
        "كبيرة",
    ),
    group!(
        "medium",
        "Medium production",
        "إنتاج متوسط",
        "medium",
        "moderate",
        "average",
        "متوسط",
        "متوسطة",
        "وسط",
        "معتدل",
        "مقبول",
    ),
    group!(
        "low",
        "Low production",
        "إنتاج منخفض",
        "low",
        "weak",
        "منخفض",
        "منخفضة",
        "ضعيف",
        "ضعيفة",
        "قليل",
        "قليلة",
    ),
];

pub static TRADITIONAL_PRODUCTS: &[Group] = &[
    group!(
        "dairy",
        "Dairy products",
        "منتجات الألبان",
        "dairy",
        "milk",
        "cheese",
        "labneh",
        "ألبان",
        "حليب",
        "جبن",
        "لبنة",
        "لبن",
    ),
    group!(
        "poultry",
        "Poultry products",
        "منتجات الدواجن",
        "poultry",
        "eggs",
        "chicken",
        "دواجن",
        "دجاج",
        "بيض",
    ),
    group!(
        "meat",
        "Meat products",
        "منتجات اللحوم",
        "meat",
        "sheep",
        "goat",
        "لحوم",
        "لحم",
        "أغنام",
        "ماعز",
    ),
    group!(
        "grains",
        "Grain products",
        "منتجات الحبوب",
        "grains",
        "burghul",
        "freekeh",
        "حبوب",
        "برغل",
        "فريكة",
        "قمح",
    ),
    group!(
        "vegetables",
        "Fresh vegetables",
        "خضروات طازجة",
        "vegetables",
        "خضروات",
        "خضار",
    ),
    group!("fruits", "Fresh fruits", "فواكه طازجة", "fruits", "فواكه", "فاكهة"),
    group!(
        "processed",
        "Processed foods",
        "أغذية مصنعة",
        "processed",
        "preserved",
        "canned",
        "jam",
        "molasses",
        "مونة",
        "مصنعة",
        "محفوظة",
        "معلبة",
        "مربى",
        "دبس",
    ),
    group!(
        "honey",
        "Honey",
        "عسل",
        "beekeeping",
        "نحل",
    ),
    group!(
        "other_products",
        "Other products",
        "منتجات أخرى",
        "other",
        "various",
        "أخرى",
        "متنوعة",
    ),
];

pub static FARM_SIZES: &[Group] = &[
    group!(
        "small",
        "Small farm",
        "زراعة صغيرة",
        "small",
        "صغير",
        "صغيرة",
        "محدود",
        "محدودة",
        "بسيط",
        "بسيطة",
        "less than 1 dunum",
        "أقل من دونم",
    ),
    group!(
        "medium",
        "Medium farm",
        "زراعة متوسطة",
        "medium",
        "متوسط",
        "متوسطة",
        "معتدل",
        "معتدلة",
    ),
    group!(
        "large",
        "Large farm",
        "زراعة كبيرة",
        "large",
        "كبير",
        "كبيرة",
        "واسع",
        "واسعة",
        "ضخم",
        "ضخمة",
    ),
];

pub static SOIL_TYPES: &[Group] = &[
    group!("clay", "Clay soil", "تربة طينية", "clay", "طين", "طينية", "طيني"),
    group!("sandy", "Sandy soil", "تربة رملية", "sandy", "sand", "رمل", "رملية", "رملي"),
    group!("loamy", "Loamy soil", "تربة طميية", "loam", "loamy", "طمي", "طميية", "طميي"),
    group!(
        "rocky",
        "Rocky soil",
        "تربة صخرية",
        "rocky",
        "stony",
        "صخري",
        "صخرية",
        "حجري",
        "حجرية",
        "صخور",
    ),
    group!("red", "Red soil", "تربة حمراء", "red soil", "حمراء", "حمرا"),
    group!("calcareous", "Calcareous soil", "تربة كلسية", "calcareous", "limestone", "كلسية", "كلسي"),
    group!("mixed", "Mixed soil", "تربة مختلطة", "mixed", "مختلط", "مختلطة", "أكثر من نوع"),
    group!(
        "other_soil",
        "Other/Unknown",
        "أخرى/غير محدد",
        "other",
        "unknown",
        "أخرى",
        "غير محدد",
        "لا أعرف",
    ),
];

/// Reliance levels shared by the fertilizer and pesticide questions.
pub static DEPENDENCY: &[Group] = &[
    group!(
        "high_dependency",
        "High dependency",
        "اعتماد عالي",
        "high",
        "heavily",
        "a lot",
        "عالي",
        "عالية",
        "كثير",
        "كثيرة",
        "اعتماد كبير",
        "بشكل كبير",
    ),
    group!(
        "medium_dependency",
        "Medium dependency",
        "اعتماد متوسط",
        "medium",
        "moderate",
        "sometimes",
        "متوسط",
        "متوسطة",
        "معتدل",
        "أحياناً",
        "أحيانا",
    ),
    group!(
        "low_dependency",
        "Low dependency",
        "اعتماد قليل",
        "low",
        "rarely",
        "little",
        "قليل",
        "قليلة",
        "منخفض",
        "منخفضة",
        "نادراً",
        "نادرا",
    ),
    group!(
        "no_dependency",
        "No dependency",
        "بدون اعتماد",
        "no",
        "none",
        "never",
        "لا",
        "لا يوجد",
        "بدون",
        "غير مستخدم",
        "لا أستخدم",
    ),
];

pub static PEST_CONTROL: &[Group] = &[
    group!(
        "chemical",
        "Chemical control",
        "مكافحة كيميائية",
        "chemical",
        "pesticides",
        "كيميائي",
        "كيميائية",
        "مبيد",
        "مبيدات",
    ),
    group!(
        "biological",
        "Biological control",
        "مكافحة حيوية",
        "biological",
        "natural",
        "organic",
        "حيوي",
        "حيوية",
        "بيولوجي",
        "طبيعي",
        "طبيعية",
        "عضوي",
    ),
    group!(
        "integrated",
        "Integrated control",
        "مكافحة متكاملة",
        "integrated",
        "IPM",
        "متكامل",
        "متكاملة",
        "مدمج",
    ),
    group!(
        "manual",
        "Manual control",
        "مكافحة يدوية",
        "manual",
        "by hand",
        "يدوي",
        "يدوية",
        "باليد",
    ),
    group!(
        "no_control",
        "No control",
        "بدون مكافحة",
        "none",
        "no control",
        "لا يوجد",
        "لا شيء",
    ),
];

pub static REGEN_PRACTICES: &[Group] = &[
    group!(
        "organic_fertilizer",
        "Organic fertilizer",
        "سماد عضوي",
        "organic fertilizer",
        "manure",
        "سماد طبيعي",
        "زبل",
        "سماد بلدي",
    ),
    group!(
        "composting",
        "Composting",
        "تسميد بالكومبوست",
        "compost",
        "كومبوست",
        "سماد عضوي مخمر",
    ),
    group!("crop_rotation", "Crop rotation", "تناوب المحاصيل", "rotation", "تناوب", "دورة زراعية"),
    group!("cover_crops", "Cover crops", "محاصيل تغطية", "cover crop", "تغطية التربة بالمحاصيل"),
    group!(
        "soil_conservation",
        "Soil conservation",
        "حفظ التربة",
        "conservation",
        "terracing",
        "المحافظة على التربة",
        "مدرجات",
        "جلول",
    ),
    group!(
        "drip_irrigation",
        "Drip irrigation",
        "ري بالتنقيط",
        "drip",
        "تنقيط",
        "الري بالتنقيط",
    ),
    group!("no_till", "No-till", "عدم الحراثة", "no till", "zero tillage", "بدون حراثة"),
    group!("mulching", "Mulching", "تغطية التربة", "mulch", "تغطية", "نشارة"),
];

/// Protected areas of Lebanon.
pub static PROTECTED_AREA_NAMES: &[Group] = &[
    group!(
        "shouf_biosphere",
        "Shouf Biosphere Reserve",
        "محمية أرز الشوف",
        "Al Shouf Cedar",
        "Shouf Cedar",
        "Shouf",
        "أرز الشوف",
        "محمية الشوف",
    ),
    group!("horsh_ehden", "Horsh Ehden", "محمية حرش إهدن", "Ehden", "حرش إهدن", "حرش اهدن"),
    group!(
        "tyre_coast",
        "Tyre Coast Nature Reserve",
        "محمية شاطئ صور",
        "Tyre Coast",
        "Tyre Beach",
        "شاطئ صور",
    ),
    group!(
        "palm_islands",
        "Palm Islands Nature Reserve",
        "محمية جزر النخيل",
        "Palm Islands",
        "Rabbit Island",
        "جزر النخيل",
    ),
    group!("bentael", "Bentael Nature Reserve", "محمية بنتاعل", "Bentael", "بنتاعل"),
    group!("yammouneh", "Yammouneh Nature Reserve", "محمية اليمونة", "Yammouneh", "اليمونة"),
    group!("ammiq", "Aammiq Wetland", "مستنقع عميق", "Ammiq", "Aammiq", "عميق"),
    group!("jabal_moussa", "Jabal Moussa", "محمية جبل موسى", "Jabal Moussa", "جبل موسى"),
    group!("qadisha", "Qadisha Valley", "وادي قاديشا", "Qadisha", "قاديشا", "Kadisha"),
    group!(
        "tannourine",
        "Tannourine Cedars Forest",
        "محمية أرز تنورين",
        "Tannourine",
        "تنورين",
    ),
    group!(
        "karm_shbat",
        "Karm Shbat Nature Reserve",
        "محمية كرم شباط",
        "Karm Shbat",
        "كرم شباط",
    ),
    group!(
        "other_protected",
        "Other protected areas",
        "مناطق محمية أخرى",
        "other",
        "أخرى",
    ),
];

pub static PROTECTED_AREA_TYPES: &[Group] = &[
    group!(
        "national_park",
        "National Park",
        "حديقة وطنية",
        "park",
        "منتزه وطني",
        "حديقة",
        "منتزه",
    ),
    group!(
        "nature_reserve",
        "Nature Reserve",
        "محمية طبيعية",
        "reserve",
        "محمية",
        "طبيعية",
    ),
    group!(
        "biosphere_reserve",
        "Biosphere Reserve",
        "محمية محيط حيوي",
        "biosphere",
        "UNESCO-MAB",
        "المحيط الحيوي",
    ),
    group!(
        "protected_area",
        "Protected Area",
        "منطقة محمية",
        "protected",
        "منطقة حماية",
        "Protected Landscape",
    ),
    group!(
        "forest_reserve",
        "Forest Reserve",
        "محمية غابات",
        "forest",
        "غابة محمية",
        "غابة",
        "حرج",
    ),
    group!(
        "wildlife_sanctuary",
        "Wildlife Sanctuary",
        "محمية الحياة البرية",
        "wildlife",
        "حياة برية",
        "محمية حيوانات",
    ),
    group!(
        "ramsar_site",
        "Ramsar Site",
        "موقع رامسار",
        "ramsar",
        "wetland",
        "Wetland of International Importance",
        "رامسار",
        "أرض رطبة",
    ),
    group!(
        "world_heritage",
        "World Heritage Site",
        "موقع تراث عالمي",
        "World Heritage",
        "تراث عالمي",
    ),
];

pub static DAY_NIGHT: &[Group] = &[
    group!("day", "Day", "نهار", "d", "daytime", "نهاري"),
    group!("night", "Night", "ليل", "n", "nighttime", "ليلي"),
];
