use crate::model::db::constituency::Constituency;

/// Tamil Nadu assembly constituencies as `(name, district)`, in order of
/// their electoral number.
const CONSTITUENCIES: [(&str, &str); 234] = [
    ("Gummidipoondi", "Tiruvallur"),
    ("Ponneri", "Tiruvallur"),
    ("Tiruttani", "Tiruvallur"),
    ("Thiruvallur", "Tiruvallur"),
    ("Poonamallee", "Tiruvallur"),
    ("Avadi", "Tiruvallur"),
    ("Maduravoyal", "Tiruvallur"),
    ("Ambattur", "Tiruvallur"),
    ("Madavaram", "Tiruvallur"),
    ("Thiruvottiyur", "Tiruvallur"),
    ("Dr. Radhakrishnan Nagar", "Chennai"),
    ("Perambur", "Chennai"),
    ("Kolathur", "Chennai"),
    ("Villivakkam", "Chennai"),
    ("Thiru-Vi-Ka-Nagar", "Chennai"),
    ("Egmore", "Chennai"),
    ("Royapuram", "Chennai"),
    ("Harbour", "Chennai"),
    ("Chepauk-Thiruvallikeni", "Chennai"),
    ("Thousand Lights", "Chennai"),
    ("Anna Nagar", "Chennai"),
    ("Virugampakkam", "Chennai"),
    ("Saidapet", "Chennai"),
    ("Thiyagarayanagar", "Chennai"),
    ("Mylapore", "Chennai"),
    ("Velachery", "Chennai"),
    ("Shozhinganallur", "Kancheepuram"),
    ("Alandur", "Kancheepuram"),
    ("Sriperumbudur", "Kancheepuram"),
    ("Pallavaram", "Kancheepuram"),
    ("Tambaram", "Kancheepuram"),
    ("Chengalpattu", "Kancheepuram"),
    ("Thiruporur", "Kancheepuram"),
    ("Cheyyur", "Kancheepuram"),
    ("Madurantakam", "Kancheepuram"),
    ("Uthiramerur", "Kancheepuram"),
    ("Kancheepuram", "Kancheepuram"),
    ("Arakkonam", "Vellore"),
    ("Sholingur", "Vellore"),
    ("Katpadi", "Vellore"),
    ("Ranipet", "Vellore"),
    ("Arcot", "Vellore"),
    ("Vellore", "Vellore"),
    ("Anaikattu", "Vellore"),
    ("Kilvaithinankuppam", "Vellore"),
    ("Gudiyattam", "Vellore"),
    ("Vaniyambadi", "Vellore"),
    ("Ambur", "Vellore"),
    ("Jolarpet", "Vellore"),
    ("Tirupattur", "Vellore"),
    ("Uthangarai", "Krishnagiri"),
    ("Bargur", "Krishnagiri"),
    ("Krishnagiri", "Krishnagiri"),
    ("Veppanahalli", "Krishnagiri"),
    ("Hosur", "Krishnagiri"),
    ("Thalli", "Krishnagiri"),
    ("Palacodu", "Dharmapuri"),
    ("Pennagaram", "Dharmapuri"),
    ("Dharmapuri", "Dharmapuri"),
    ("Pappireddippatti", "Dharmapuri"),
    ("Harur", "Dharmapuri"),
    ("Chengam", "Tiruvannamalai"),
    ("Tiruvannamalai", "Tiruvannamalai"),
    ("Kilpennathur", "Tiruvannamalai"),
    ("Kalasapakkam", "Tiruvannamalai"),
    ("Polur", "Tiruvannamalai"),
    ("Arani", "Tiruvannamalai"),
    ("Cheyyar", "Tiruvannamalai"),
    ("Vandavasi", "Tiruvannamalai"),
    ("Gingee", "Villupuram"),
    ("Mailam", "Villupuram"),
    ("Tindivanam", "Villupuram"),
    ("Vanur", "Villupuram"),
    ("Villupuram", "Villupuram"),
    ("Vikravandi", "Villupuram"),
    ("Tirukkoyilur", "Villupuram"),
    ("Ulundurpettai", "Villupuram"),
    ("Rishivandiyam", "Villupuram"),
    ("Sankarapuram", "Villupuram"),
    ("Kallakurichi", "Villupuram"),
    ("Gangavalli", "Salem"),
    ("Attur", "Salem"),
    ("Yercaud", "Salem"),
    ("Omalur", "Salem"),
    ("Mettur", "Salem"),
    ("Edappadi", "Salem"),
    ("Sankari", "Salem"),
    ("Salem (West)", "Salem"),
    ("Salem (North)", "Salem"),
    ("Salem (South)", "Salem"),
    ("Veerapandi", "Salem"),
    ("Rasipuram", "Namakkal"),
    ("Senthamangalam", "Namakkal"),
    ("Namakkal", "Namakkal"),
    ("Paramathi-Velur", "Namakkal"),
    ("Tiruchengodu", "Namakkal"),
    ("Kumarapalayam", "Namakkal"),
    ("Erode (East)", "Erode"),
    ("Erode (West)", "Erode"),
    ("Modakkurichi", "Erode"),
    ("Dharapuram", "Tiruppur"),
    ("Kangayam", "Tiruppur"),
    ("Perundurai", "Erode"),
    ("Bhavani", "Erode"),
    ("Anthiyur", "Erode"),
    ("Gobichettipalayam", "Erode"),
    ("Bhavanisagar", "Erode"),
    ("Udhagamandalam", "The Nilgiris"),
    ("Gudalur", "The Nilgiris"),
    ("Coonoor", "The Nilgiris"),
    ("Mettuppalayam", "Coimbatore"),
    ("Avanashi", "Tiruppur"),
    ("Tiruppur (North)", "Tiruppur"),
    ("Tiruppur (South)", "Tiruppur"),
    ("Palladam", "Tiruppur"),
    ("Sulur", "Coimbatore"),
    ("Kavundampalayam", "Coimbatore"),
    ("Coimbatore (North)", "Coimbatore"),
    ("Thondamuthur", "Coimbatore"),
    ("Coimbatore (South)", "Coimbatore"),
    ("Singanallur", "Coimbatore"),
    ("Kinathukadavu", "Coimbatore"),
    ("Pollachi", "Coimbatore"),
    ("Valparai", "Coimbatore"),
    ("Udumalaipettai", "Tiruppur"),
    ("Madathukulam", "Tiruppur"),
    ("Palani", "Dindigul"),
    ("Oddanchatram", "Dindigul"),
    ("Athoor", "Dindigul"),
    ("Nilakkottai", "Dindigul"),
    ("Natham", "Dindigul"),
    ("Dindigul", "Dindigul"),
    ("Vedasandur", "Dindigul"),
    ("Aravakurichi", "Karur"),
    ("Karur", "Karur"),
    ("Krishnarayapuram", "Karur"),
    ("Kulithalai", "Karur"),
    ("Manapparai", "Tiruchirappalli"),
    ("Srirangam", "Tiruchirappalli"),
    ("Tiruchirappalli (West)", "Tiruchirappalli"),
    ("Tiruchirappalli (East)", "Tiruchirappalli"),
    ("Thiruverumbur", "Tiruchirappalli"),
    ("Lalgudi", "Tiruchirappalli"),
    ("Manachanallur", "Tiruchirappalli"),
    ("Musiri", "Tiruchirappalli"),
    ("Thuraiyur", "Tiruchirappalli"),
    ("Perambalur", "Perambalur"),
    ("Kunnam", "Perambalur"),
    ("Ariyalur", "Ariyalur"),
    ("Jayankondam", "Ariyalur"),
    ("Tittakudi", "Cuddalore"),
    ("Vriddhachalam", "Cuddalore"),
    ("Neyveli", "Cuddalore"),
    ("Panruti", "Cuddalore"),
    ("Cuddalore", "Cuddalore"),
    ("Kurinjipadi", "Cuddalore"),
    ("Bhuvanagiri", "Cuddalore"),
    ("Chidambaram", "Cuddalore"),
    ("Kattumannarkoil", "Cuddalore"),
    ("Sirkazhi", "Nagapattinam"),
    ("Mayiladuthurai", "Nagapattinam"),
    ("Poompuhar", "Nagapattinam"),
    ("Nagapattinam", "Nagapattinam"),
    ("Kilvelur", "Nagapattinam"),
    ("Vedaranyam", "Nagapattinam"),
    ("Thiruthuraipoondi", "Tiruvarur"),
    ("Mannargudi", "Tiruvarur"),
    ("Thiruvarur", "Tiruvarur"),
    ("Nannilam", "Tiruvarur"),
    ("Thiruvidaimarudur", "Thanjavur"),
    ("Kumbakonam", "Thanjavur"),
    ("Papanasam", "Thanjavur"),
    ("Thiruvaiyaru", "Thanjavur"),
    ("Thanjavur", "Thanjavur"),
    ("Orathanadu", "Thanjavur"),
    ("Pattukkottai", "Thanjavur"),
    ("Peravurani", "Thanjavur"),
    ("Gandharvakottai", "Pudukkottai"),
    ("Viralimalai", "Pudukkottai"),
    ("Pudukkottai", "Pudukkottai"),
    ("Thirumayam", "Pudukkottai"),
    ("Alangudi", "Pudukkottai"),
    ("Aranthangi", "Pudukkottai"),
    ("Karaikudi", "Sivaganga"),
    ("Tiruppattur", "Sivaganga"),
    ("Sivaganga", "Sivaganga"),
    ("Manamadurai", "Sivaganga"),
    ("Melur", "Madurai"),
    ("Madurai East", "Madurai"),
    ("Sholavandan", "Madurai"),
    ("Madurai North", "Madurai"),
    ("Madurai South", "Madurai"),
    ("Madurai Central", "Madurai"),
    ("Madurai West", "Madurai"),
    ("Thiruparankundram", "Madurai"),
    ("Thirumangalam", "Madurai"),
    ("Usilampatti", "Madurai"),
    ("Andipatti", "Theni"),
    ("Periyakulam", "Theni"),
    ("Bodinayakanur", "Theni"),
    ("Cumbum", "Theni"),
    ("Rajapalayam", "Virudhunagar"),
    ("Srivilliputhur", "Virudhunagar"),
    ("Sattur", "Virudhunagar"),
    ("Sivakasi", "Virudhunagar"),
    ("Virudhunagar", "Virudhunagar"),
    ("Aruppukkottai", "Virudhunagar"),
    ("Tiruchuli", "Virudhunagar"),
    ("Paramakudi", "Ramanathapuram"),
    ("Tiruvadanai", "Ramanathapuram"),
    ("Ramanathapuram", "Ramanathapuram"),
    ("Mudukulathur", "Ramanathapuram"),
    ("Vilathikulam", "Thoothukudi"),
    ("Thoothukkudi", "Thoothukudi"),
    ("Tiruchendur", "Thoothukudi"),
    ("Srivaikuntam", "Thoothukudi"),
    ("Ottapidaram", "Thoothukudi"),
    ("Kovilpatti", "Thoothukudi"),
    ("Sankarankovil", "Tirunelveli"),
    ("Vasudevanallur", "Tirunelveli"),
    ("Kadayanallur", "Tirunelveli"),
    ("Tenkasi", "Tirunelveli"),
    ("Alangulam", "Tirunelveli"),
    ("Tirunelveli", "Tirunelveli"),
    ("Ambasamudram", "Tirunelveli"),
    ("Palayamkottai", "Tirunelveli"),
    ("Nanguneri", "Tirunelveli"),
    ("Radhapuram", "Tirunelveli"),
    ("Kanniyakumari", "Kanniyakumari"),
    ("Nagercoil", "Kanniyakumari"),
    ("Colachel", "Kanniyakumari"),
    ("Padmanabhapuram", "Kanniyakumari"),
    ("Vilavancode", "Kanniyakumari"),
    ("Killiyoor", "Kanniyakumari"),
];

/// Every constituency, numbered from 1.
pub fn constituencies() -> Vec<Constituency> {
    CONSTITUENCIES
        .iter()
        .zip(1..)
        .map(|((name, district), number)| Constituency::new(number, name, district))
        .collect()
}
