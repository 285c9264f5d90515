//! Display labels for survey property keys and prediction values.
//!
//! Keys come in three spellings across the survey files: the numbered
//! canonical keys (`_4`, `_5`, ...), the raw Arabic question text and the
//! English question text. All of them map to the same bilingual label.

#![allow(clippy::too_many_lines)]

use resolve_map_survey_models::{Language, LayerId, Theme};
use serde_json::Value;

/// `(property key, English label, Arabic label)`
type LabelRow = (&'static str, &'static str, &'static str);

static VILLAGE_AND_COORDS: &[LabelRow] = &[
    ("القرية", "Village", "القرية"),
    ("القرية:", "Village", "القرية"),
    ("4.القرية", "Village", "القرية"),
    ("4.القرية:", "Village", "القرية"),
    ("4. Village", "Village", "القرية"),
    ("Village", "Village", "القرية"),
    ("Y", "Latitude", "خط العرض"),
    ("X", "Longitude", "خط الطول"),
];

static WATER: &[LabelRow] = &[
    ("المحصول", "Crops", "المحصول"),
    (
        "10.ما هما المحصولان الرئيسيان اللذان تزرعهما خلال السنة (حسب المساحة أو الدخل)؟",
        "Crops",
        "المحصول",
    ),
    ("10. Main Crops", "Crops", "المحصول"),
    ("_4", "Cultivation Months", "اشهر الزراعة"),
    ("_5", "Crop Irrigation", "ريّ المحصول"),
    ("ريّ المحصول", "Crop Irrigation", "ريّ المحصول"),
    ("_6", "Main Water Source", "مصدر مياه الريّ الرئيسي"),
    ("مصدر مياه الريّ الرئيسي", "Main Water Source", "مصدر مياه الريّ الرئيسي"),
    (
        "13.ما هو المصدر الرئيسي للمياه المستخدمة في الري؟",
        "Main irrigation source",
        "مصدر مياه الريّ الرئيسي",
    ),
    ("13. Water Source", "Main irrigation source", "مصدر مياه الريّ الرئيسي"),
    ("_7", "Water Availability", "توفر المياه"),
    ("توفر المياه", "Water Availability", "توفر المياه"),
    (
        "16.كيف تقيّم توفر المياه خلال موسم الزراعة؟",
        "Water sufficiency",
        "توفر المياه",
    ),
    ("16. Water Availability", "Water sufficiency", "توفر المياه"),
    ("_8", "Water Shortage Months", "أشهر شح المياه"),
    ("17. Water Scarcity Months", "Scarcity months", "أشهر الشح"),
    (
        "18. Change in Irrigation Needs",
        "Irrigation needs change",
        "تغير احتياجات الري",
    ),
];

static ENERGY: &[LabelRow] = &[
    ("_3", "Energy Source", "مصدر الطاقة"),
    ("مصدر الطاقة الرئيسي", "Main Energy Source", "مصدر الطاقة الرئيسي"),
    ("14. Energy Source", "Main Energy Source", "مصدر الطاقة الرئيسي"),
    (
        "_4",
        "Peak Season Energy Use",
        "كمية الطاقة المستخدمة خلال موسم الذروة",
    ),
    ("_5", "Manual %", "يدويا%"),
    ("_6", "Diesel %", "ديزل%"),
    ("_7", "Grid %", "شبكة%"),
    ("_8", "Gasoline %", "بنزين%"),
    ("_9", "Solar %", "شمسية%"),
    ("_10", "Diesel L/Week (Avg)", "ديزل لتر/أسبوع (متوسط)"),
    ("_11", "Gasoline L/Week (Avg)", "بنزين لتر/أسبوع (متوسط)"),
    ("_12", "kW/Week (Avg)", "كيلوواط/أسبوع (متوسط)"),
];

static FOOD: &[LabelRow] = &[
    ("_3", "Main Crops", "المحاصيل الرئيسية"),
    ("_4", "Crop Timing", "توقيت المحاصيل"),
    ("_5", "Production Level", "مستوى الانتاج"),
    ("مستوى الانتاج", "Production Level", "مستوى الانتاج"),
    ("_6", "Main Traditional Products", "المنتجات التقليدية الرئيسية"),
    (
        "المنتجات التقليدية الرئيسية",
        "Main Traditional Products",
        "المنتجات التقليدية الرئيسية",
    ),
    (
        "_7",
        "Food Preservation Participation",
        "نسبة المشاركين في تحضير المؤونة",
    ),
    ("_8", "Animal Types", "انواع الحيوانات"),
    ("_9", "Number of Birds", "عدد الطيور"),
    ("عدد الطيور", "Number of Birds", "عدد الطيور"),
    ("_10", "Feed Type", "نوع العلف"),
];

static GENERAL: &[LabelRow] = &[
    ("2.الفئة العمرية:", "Age Group", "الفئة العمرية"),
    ("2. Age Group", "Age Group", "الفئة العمرية"),
    ("3.الجنس:", "Gender", "الجنس"),
    ("3. Gender", "Gender", "الجنس"),
    ("_3", "Farm Size", "حجم الزراعة"),
    ("حجم الزراعة", "Farm Size", "حجم الزراعة"),
    ("8.ما هو حجم الحيازة الزراعية الخاصة بك؟", "Farm Size", "حجم الزراعة"),
    ("8. Farm Size", "Farm Size", "حجم الزراعة"),
    ("_4", "Soil Type", "نوع التربة"),
    ("نوع التربة", "Soil Type", "نوع التربة"),
    ("9.ما هو نوع التربة في أرضك؟", "Soil Type", "نوع التربة"),
    ("9. Soil Type", "Soil Type", "نوع التربة"),
    ("_5", "Climate Changes", "التغيرات المناخية"),
    ("_6", "Climate Change Impact", "تأثير التغيرات المناخية"),
];

static REGEN: &[LabelRow] = &[
    ("_3", "Regenerative Techniques", "تقنيات الزراعة التجديدية"),
    ("_4", "Soil Amendment Types", "أنواع محسنات التربة"),
    ("_5", "Chemical Fertilizers", "الاسمدة الكيميائية"),
    (
        "الاعتماد على الاسمدة الكيميائية",
        "Chemical Fertilizers",
        "الاسمدة الكيميائية",
    ),
    ("_6", "Pest Control", "مكافحة الآفات"),
    ("مكافحة الآفات", "Pest Control", "مكافحة الآفات"),
];

static PREDICTIONS: &[LabelRow] = &[
    ("Village_Name", "Village", "القرية"),
    (
        "Practices_Regen",
        "Current Agricultural Practices",
        "الممارسات الزراعية الحالية",
    ),
    ("Water_Availability", "Water Availability", "توفر المياه"),
    ("Production_Level", "Current Production Level", "مستوى الإنتاج الحالي"),
    (
        "Pred_Regen_Adoption",
        "Regenerative Adoption Prediction",
        "توقع اعتماد الزراعة التجديدية",
    ),
    ("Pred_Water_Risk", "Water Risk Prediction", "توقع خطر شح المياه"),
    (
        "Pred_Production_Level",
        "Production Capacity Prediction",
        "توقع القدرة الإنتاجية",
    ),
];

static FIRE: &[LabelRow] = &[
    ("ACQ_DATE", "Acquisition Date", "تاريخ الرصد"),
    ("ACQ_TIME", "Acquisition Time", "وقت الرصد"),
    ("DAYNIGHT", "Day/Night", "نهار/ليل"),
    ("BRIGHTNESS", "Brightness", "السطوع"),
    ("CONFIDENCE", "Confidence", "الثقة"),
    ("LATITUDE", "Latitude", "خط العرض"),
    ("LONGITUDE", "Longitude", "خط الطول"),
];

static PRESERVATIONS: &[LabelRow] = &[
    ("NAME", "Name", "الاسم"),
    ("ORIG_NAME", "Original Name", "الاسم الأصلي"),
    ("DESIG", "Designation", "التصنيف"),
    ("DESIG_TYPE", "Designation Type", "نوع التصنيف"),
    ("GOV_TYPE", "Governance", "نوع الإدارة"),
    ("REP_AREA", "Reported Area (km²)", "المساحة المعلنة (كم²)"),
    ("GIS_AREA", "GIS Area (km²)", "المساحة المحسوبة (كم²)"),
];

/// `(prediction key, raw value, English label, Arabic label)`
static PREDICTION_VALUES: &[(&str, &str, &str, &str)] = &[
    ("Pred_Regen_Adoption", "0", "Unlikely to Adopt", "غير محتمل الاعتماد"),
    ("Pred_Regen_Adoption", "1", "Likely to Adopt", "محتمل الاعتماد"),
    ("Pred_Water_Risk", "0", "Low Risk", "خطر منخفض"),
    ("Pred_Water_Risk", "1", "High Risk", "خطر عالي"),
    ("Pred_Production_Level", "0", "Low", "منخفض"),
    ("Pred_Production_Level", "1", "Medium", "متوسط"),
    ("Pred_Production_Level", "2", "High", "عالي"),
];

fn layer_rows(layer: LayerId) -> &'static [LabelRow] {
    match layer {
        LayerId::WaterPoints => WATER,
        LayerId::EnergyPoints => ENERGY,
        LayerId::FoodPoints => FOOD,
        LayerId::GeneralPoints => GENERAL,
        LayerId::RegenPoints => REGEN,
        LayerId::FirePoints => FIRE,
        LayerId::PreservationsPoly => PRESERVATIONS,
        LayerId::FarmersPoints => PREDICTIONS,
    }
}

const fn pick(row: &LabelRow, language: Language) -> &'static str {
    match language {
        Language::En => row.1,
        Language::Ar => row.2,
    }
}

/// Display label of `key` on `layer`, or the key itself when unknown.
#[must_use]
pub fn property_label(layer: LayerId, key: &str, language: Language) -> String {
    let shared: &[LabelRow] = if layer.theme().is_some() {
        VILLAGE_AND_COORDS
    } else {
        &[]
    };

    layer_rows(layer)
        .iter()
        .chain(shared)
        .find(|row| row.0 == key)
        .map_or_else(|| key.to_string(), |row| pick(row, language).to_string())
}

/// Display name of a theme.
#[must_use]
pub const fn theme_label(theme: Theme, language: Language) -> &'static str {
    match (theme, language) {
        (Theme::Water, Language::En) => "Water",
        (Theme::Water, Language::Ar) => "المياه",
        (Theme::Energy, Language::En) => "Energy",
        (Theme::Energy, Language::Ar) => "الطاقة",
        (Theme::Food, Language::En) => "Food",
        (Theme::Food, Language::Ar) => "الغذاء",
        (Theme::General, Language::En) => "General Info",
        (Theme::General, Language::Ar) => "معلومات عامة",
        (Theme::Regen, Language::En) => "Regenerative Agriculture",
        (Theme::Regen, Language::Ar) => "الزراعة التجديدية",
    }
}

/// Removes leading question numbering (`"13. Water Source"` becomes
/// `"Water Source"`).
#[must_use]
pub fn clean_label(label: &str) -> &str {
    let digits = label.len() - label.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return label;
    }

    label[digits..]
        .strip_prefix('.')
        .map_or(label, str::trim_start)
}

/// Formats a raw property value for display.
///
/// Empty values render as `-`, prediction codes as their bilingual labels
/// and booleans as check marks. Everything else is shown as is.
#[must_use]
pub fn format_value(value: &Value, key: &str, language: Language) -> String {
    let raw = match value {
        Value::Null => return "-".to_string(),
        Value::String(s) if s.is_empty() => return "-".to_string(),
        Value::Bool(true) => return "✓".to_string(),
        Value::Bool(false) => return "✗".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    PREDICTION_VALUES
        .iter()
        .find(|(pred_key, code, _, _)| *pred_key == key && *code == raw)
        .map_or(raw, |(_, _, en, ar)| match language {
            Language::En => (*en).to_string(),
            Language::Ar => (*ar).to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbered_and_question_keys_share_labels() {
        assert_eq!(
            property_label(LayerId::WaterPoints, "_7", Language::En),
            "Water Availability"
        );
        assert_eq!(
            property_label(LayerId::WaterPoints, "_7", Language::Ar),
            "توفر المياه"
        );
        assert_eq!(
            property_label(LayerId::GeneralPoints, "9. Soil Type", Language::Ar),
            "نوع التربة"
        );
    }

    #[test]
    fn shared_village_label_applies_to_themes_only() {
        assert_eq!(
            property_label(LayerId::FoodPoints, "4.القرية:", Language::En),
            "Village"
        );
        assert_eq!(
            property_label(LayerId::FirePoints, "القرية", Language::En),
            "القرية"
        );
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        assert_eq!(
            property_label(LayerId::EnergyPoints, "mystery", Language::Ar),
            "mystery"
        );
    }

    #[test]
    fn strips_question_numbers_from_labels() {
        assert_eq!(clean_label("13. Water Source"), "Water Source");
        assert_eq!(clean_label("4.القرية"), "القرية");
        assert_eq!(clean_label("Water Source"), "Water Source");
        assert_eq!(clean_label("2024"), "2024");
    }

    #[test]
    fn formats_predictions_and_empties() {
        assert_eq!(
            format_value(&json!(1), "Pred_Water_Risk", Language::En),
            "High Risk"
        );
        assert_eq!(
            format_value(&json!("2"), "Pred_Production_Level", Language::Ar),
            "عالي"
        );
        assert_eq!(format_value(&json!(null), "X", Language::En), "-");
        assert_eq!(format_value(&json!(""), "X", Language::En), "-");
        assert_eq!(format_value(&json!(true), "flag", Language::En), "✓");
        assert_eq!(format_value(&json!(3.5), "X", Language::En), "3.5");
    }
}
