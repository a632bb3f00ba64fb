//! Indian states and major cities.
//!
//! Static lookup data backing the shipping form: the state list populates
//! the state selector and `cities_of` drives the dependent city selector.

/// States and union territories with their major cities.
static STATES_AND_CITIES: &[(&str, &[&str])] = &[
    ("Andhra Pradesh", &["Visakhapatnam", "Vijayawada", "Guntur", "Nellore", "Kurnool", "Rajahmundry", "Tirupati", "Kakinada", "Kadapa", "Anantapur"]),
    ("Arunachal Pradesh", &["Itanagar", "Naharlagun", "Pasighat", "Tawang", "Ziro", "Bomdila", "Aalo", "Tezu", "Namsai", "Roing"]),
    ("Assam", &["Guwahati", "Silchar", "Dibrugarh", "Jorhat", "Nagaon", "Tinsukia", "Tezpur", "Karimganj", "Sivasagar", "Diphu"]),
    ("Bihar", &["Patna", "Gaya", "Bhagalpur", "Muzaffarpur", "Darbhanga", "Arrah", "Begusarai", "Chhapra", "Katihar", "Munger"]),
    ("Chhattisgarh", &["Raipur", "Bhilai", "Bilaspur", "Korba", "Durg", "Rajnandgaon", "Jagdalpur", "Ambikapur", "Raigarh", "Dhamtari"]),
    ("Goa", &["Panaji", "Margao", "Vasco da Gama", "Mapusa", "Ponda", "Bicholim", "Curchorem", "Sanquelim", "Canacona", "Quepem"]),
    ("Gujarat", &["Ahmedabad", "Surat", "Vadodara", "Rajkot", "Bhavnagar", "Jamnagar", "Junagadh", "Gandhinagar", "Anand", "Navsari"]),
    ("Haryana", &["Faridabad", "Gurgaon", "Panipat", "Ambala", "Yamunanagar", "Rohtak", "Hisar", "Karnal", "Sonipat", "Panchkula"]),
    ("Himachal Pradesh", &["Shimla", "Mandi", "Solan", "Dharamshala", "Baddi", "Nahan", "Hamirpur", "Kullu", "Una", "Chamba"]),
    ("Jharkhand", &["Ranchi", "Jamshedpur", "Dhanbad", "Bokaro", "Hazaribagh", "Deoghar", "Giridih", "Ramgarh", "Phusro", "Medininagar"]),
    ("Karnataka", &["Bangalore", "Mysore", "Hubli-Dharwad", "Mangalore", "Belgaum", "Gulbarga", "Davanagere", "Bellary", "Bijapur", "Shimoga"]),
    ("Kerala", &["Thiruvananthapuram", "Kochi", "Kozhikode", "Thrissur", "Kollam", "Palakkad", "Alappuzha", "Kannur", "Kottayam", "Malappuram"]),
    ("Madhya Pradesh", &["Indore", "Bhopal", "Jabalpur", "Gwalior", "Ujjain", "Sagar", "Dewas", "Satna", "Ratlam", "Rewa"]),
    ("Maharashtra", &["Mumbai", "Pune", "Nagpur", "Thane", "Nashik", "Aurangabad", "Solapur", "Kolhapur", "Amravati", "Nanded"]),
    ("Manipur", &["Imphal", "Thoubal", "Bishnupur", "Ukhrul", "Churachandpur", "Kakching", "Senapati", "Tamenglong", "Chandel", "Jiribam"]),
    ("Meghalaya", &["Shillong", "Tura", "Jowai", "Nongpoh", "Williamnagar", "Baghmara", "Resubelpara", "Ampati", "Khliehriat", "Mawkyrwat"]),
    ("Mizoram", &["Aizawl", "Lunglei", "Champhai", "Serchhip", "Kolasib", "Lawngtlai", "Saiha", "Mamit", "Khawzawl", "Hnahthial"]),
    ("Nagaland", &["Kohima", "Dimapur", "Mokokchung", "Tuensang", "Wokha", "Zunheboto", "Mon", "Phek", "Kiphire", "Longleng"]),
    ("Odisha", &["Bhubaneswar", "Cuttack", "Rourkela", "Berhampur", "Sambalpur", "Puri", "Balasore", "Bhadrak", "Baripada", "Jharsuguda"]),
    ("Punjab", &["Ludhiana", "Amritsar", "Jalandhar", "Patiala", "Bathinda", "Mohali", "Pathankot", "Hoshiarpur", "Batala", "Moga"]),
    ("Rajasthan", &["Jaipur", "Jodhpur", "Kota", "Bikaner", "Ajmer", "Udaipur", "Bhilwara", "Alwar", "Sikar", "Sri Ganganagar"]),
    ("Sikkim", &["Gangtok", "Namchi", "Mangan", "Gyalshing", "Rangpo", "Singtam", "Jorethang", "Nayabazar", "Ravangla", "Chungthang"]),
    ("Tamil Nadu", &["Chennai", "Coimbatore", "Madurai", "Tiruchirappalli", "Salem", "Tirunelveli", "Tiruppur", "Vellore", "Erode", "Thoothukudi"]),
    ("Telangana", &["Hyderabad", "Warangal", "Nizamabad", "Karimnagar", "Ramagundam", "Khammam", "Mahbubnagar", "Nalgonda", "Adilabad", "Suryapet"]),
    ("Tripura", &["Agartala", "Udaipur", "Dharmanagar", "Kailasahar", "Belonia", "Khowai", "Ambassa", "Kamalpur", "Teliamura", "Sabroom"]),
    ("Uttar Pradesh", &["Lucknow", "Kanpur", "Ghaziabad", "Agra", "Meerut", "Varanasi", "Allahabad", "Bareilly", "Aligarh", "Moradabad"]),
    ("Uttarakhand", &["Dehradun", "Haridwar", "Roorkee", "Haldwani", "Rudrapur", "Kashipur", "Rishikesh", "Pithoragarh", "Ramnagar", "Khatima"]),
    ("West Bengal", &["Kolkata", "Asansol", "Siliguri", "Durgapur", "Bardhaman", "Malda", "Baharampur", "Habra", "Kharagpur", "Shantipur"]),
    ("Andaman and Nicobar Islands", &["Port Blair", "Mayabunder", "Diglipur", "Rangat", "Little Andaman", "Car Nicobar", "Kamorta", "Campbell Bay", "Havelock Island", "Neil Island"]),
    ("Chandigarh", &["Chandigarh"]),
    ("Dadra and Nagar Haveli and Daman and Diu", &["Silvassa", "Daman", "Diu"]),
    ("Delhi", &["New Delhi", "Delhi", "Noida", "Gurgaon", "Faridabad", "Ghaziabad"]),
    ("Jammu and Kashmir", &["Srinagar", "Jammu", "Anantnag", "Baramulla", "Kathua", "Sopore", "Udhampur", "Poonch", "Kupwara", "Pulwama"]),
    ("Ladakh", &["Leh", "Kargil", "Diskit", "Zanskar", "Nubra", "Khaltse", "Drass", "Sankoo", "Padum", "Nyoma"]),
    ("Lakshadweep", &["Kavaratti", "Agatti", "Amini", "Andrott", "Minicoy", "Kalpeni", "Kiltan", "Kadmat", "Chetlat", "Bitra"]),
    ("Puducherry", &["Puducherry", "Karaikal", "Yanam", "Mahe"]),
];

/// All states and union territories, in display order.
pub fn states() -> impl Iterator<Item = &'static str> {
    STATES_AND_CITIES.iter().map(|(state, _)| *state)
}

/// Major cities of a state, or None if the state is unknown.
pub fn cities_of(state: &str) -> Option<&'static [&'static str]> {
    STATES_AND_CITIES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, cities)| *cities)
}

/// Check whether a state name is in the list.
pub fn is_known_state(state: &str) -> bool {
    cities_of(state).is_some()
}
