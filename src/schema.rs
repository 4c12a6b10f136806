diesel::table! {
    advocates (id) {
        id -> Integer,
        first_name -> Text,
        last_name -> Text,
        city -> Text,
        degree -> Text,
        specialties -> Text,
        years_of_experience -> Integer,
        phone_number -> Text,
        created_at -> Timestamp,
    }
}
