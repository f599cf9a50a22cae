//! Airports served by Southwest Airlines.

use chrono_tz::{America, Pacific};

use super::{AirportDirectory, AirportDirectoryBuilder};

/// Build the directory of Southwest destinations.
pub(super) fn airports() -> AirportDirectory {
    AirportDirectoryBuilder::new()
        .add("ABQ", "Albuquerque, NM", America::Denver)
        .add("ALB", "Albany, NY", America::New_York)
        .add("AMA", "Amarillo, TX", America::Chicago)
        .add("ATL", "Atlanta, GA", America::New_York)
        .add("AUA", "Aruba", America::Aruba)
        .add("AUS", "Austin, TX", America::Chicago)
        .add("BDL", "Hartford, CT", America::New_York)
        .add("BHM", "Birmingham, AL", America::Chicago)
        .add("BLI", "Bellingham, WA", America::Los_Angeles)
        .add("BNA", "Nashville, TN", America::Chicago)
        .add("BOI", "Boise, ID", America::Boise)
        .add("BOS", "Boston Logan, MA", America::New_York)
        .add("BUF", "Buffalo/Niagara, NY", America::New_York)
        .add("BUR", "Burbank, CA", America::Los_Angeles)
        .add("BWI", "Baltimore/Washington, MD", America::New_York)
        .add("BZE", "Belize City, Belize", America::Belize)
        .add("CHS", "Charleston, SC", America::New_York)
        .add("CLE", "Cleveland, OH", America::New_York)
        .add("CLT", "Charlotte, NC", America::New_York)
        .add("CMH", "Columbus, OH", America::New_York)
        .add("CRP", "Corpus Christi, TX", America::Chicago)
        .add("CUN", "Cancun, Mexico", America::Cancun)
        .add("CVG", "Cincinnati, OH", America::New_York)
        .add("DAL", "Dallas (Love Field), TX", America::Chicago)
        .add("DCA", "Washington (Reagan National), DC", America::New_York)
        .add("DEN", "Denver, CO", America::Denver)
        .add("DSM", "Des Moines, IA", America::Chicago)
        .add("DTW", "Detroit, MI", America::Detroit)
        .add("ECP", "Panama City Beach, FL", America::Chicago)
        .add("ELP", "El Paso, TX", America::Denver)
        .add("EWR", "Newark, NJ", America::New_York)
        .add("EYW", "Key West, FL", America::New_York)
        .add("FAT", "Fresno, CA", America::Los_Angeles)
        .add("FLL", "Fort Lauderdale, FL", America::New_York)
        .add("GCM", "Grand Cayman, Cayman Islands", America::Cayman)
        .add("GEG", "Spokane, WA", America::Los_Angeles)
        .add("GRR", "Grand Rapids, MI", America::Detroit)
        .add("GSP", "Greenville/Spartanburg, SC", America::New_York)
        .add("HAV", "Havana, Cuba", America::Havana)
        .add("HNL", "Honolulu, HI", Pacific::Honolulu)
        .add("HOU", "Houston (Hobby), TX", America::Chicago)
        .add("HRL", "Harlingen, TX", America::Chicago)
        .add("IAD", "Washington (Dulles), DC", America::New_York)
        .add("IAH", "Houston (Bush Intercontinental), TX", America::Chicago)
        .add("ICT", "Wichita, KS", America::Chicago)
        .add("IND", "Indianapolis, IN", America::Indiana::Indianapolis)
        .add("ISP", "Long Island/Islip, NY", America::New_York)
        .add("ITO", "Hilo, HI", Pacific::Honolulu)
        .add("JAN", "Jackson, MS", America::Chicago)
        .add("JAX", "Jacksonville, FL", America::New_York)
        .add("KOA", "Kona, HI", Pacific::Honolulu)
        .add("LAS", "Las Vegas, NV", America::Los_Angeles)
        .add("LAX", "Los Angeles, CA", America::Los_Angeles)
        .add("LBB", "Lubbock, TX", America::Chicago)
        .add("LGA", "New York (LaGuardia), NY", America::New_York)
        .add("LGB", "Long Beach, CA", America::Los_Angeles)
        .add("LIH", "Lihue, HI", Pacific::Honolulu)
        .add("LIR", "Liberia, Costa Rica", America::Costa_Rica)
        .add("LIT", "Little Rock, AR", America::Chicago)
        .add("MAF", "Midland/Odessa, TX", America::Chicago)
        .add("MBJ", "Montego Bay, Jamaica", America::Jamaica)
        .add("MCI", "Kansas City, MO", America::Chicago)
        .add("MCO", "Orlando, FL", America::New_York)
        .add("MDW", "Chicago (Midway), IL", America::Chicago)
        .add("MEM", "Memphis, TN", America::Chicago)
        .add("MHT", "Manchester, NH", America::New_York)
        .add("MIA", "Miami, FL", America::New_York)
        .add("MKE", "Milwaukee, WI", America::Chicago)
        .add("MSP", "Minneapolis/St. Paul, MN", America::Chicago)
        .add("MSY", "New Orleans, LA", America::Chicago)
        .add("NAS", "Nassau, Bahamas", America::Nassau)
        .add("OAK", "Oakland, CA", America::Los_Angeles)
        .add("OGG", "Maui, HI", Pacific::Honolulu)
        .add("OKC", "Oklahoma City, OK", America::Chicago)
        .add("OMA", "Omaha, NE", America::Chicago)
        .add("ONT", "Ontario/LA, CA", America::Los_Angeles)
        .add("ORD", "Chicago (O'Hare), IL", America::Chicago)
        .add("ORF", "Norfolk, VA", America::New_York)
        .add("PBI", "West Palm Beach, FL", America::New_York)
        .add("PDX", "Portland, OR", America::Los_Angeles)
        .add("PHL", "Philadelphia, PA", America::New_York)
        .add("PHX", "Phoenix, AZ", America::Phoenix)
        .add("PIT", "Pittsburgh, PA", America::New_York)
        .add("PLS", "Providenciales, Turks and Caicos", America::Grand_Turk)
        .add("PNS", "Pensacola, FL", America::Chicago)
        .add("PUJ", "Punta Cana, Dominican Republic", America::Santo_Domingo)
        .add("PVD", "Providence, RI", America::New_York)
        .add("PVR", "Puerto Vallarta, Mexico", America::Bahia_Banderas)
        .add("PWM", "Portland, ME", America::New_York)
        .add("RDU", "Raleigh/Durham, NC", America::New_York)
        .add("RIC", "Richmond, VA", America::New_York)
        .add("RNO", "Reno/Tahoe, NV", America::Los_Angeles)
        .add("ROC", "Rochester, NY", America::New_York)
        .add("RSW", "Fort Myers, FL", America::New_York)
        .add("SAN", "San Diego, CA", America::Los_Angeles)
        .add("SAT", "San Antonio, TX", America::Chicago)
        .add("SAV", "Savannah, GA", America::New_York)
        .add("SDF", "Louisville, KY", America::Kentucky::Louisville)
        .add("SEA", "Seattle/Tacoma, WA", America::Los_Angeles)
        .add("SFO", "San Francisco, CA", America::Los_Angeles)
        .add("SJC", "San Jose, CA", America::Los_Angeles)
        .add("SJD", "Los Cabos, Mexico", America::Mazatlan)
        .add("SJO", "San Jose, Costa Rica", America::Costa_Rica)
        .add("SJU", "San Juan, PR", America::Puerto_Rico)
        .add("SLC", "Salt Lake City, UT", America::Denver)
        .add("SMF", "Sacramento, CA", America::Los_Angeles)
        .add("SNA", "Orange County/Santa Ana, CA", America::Los_Angeles)
        .add("SRQ", "Sarasota/Bradenton, FL", America::New_York)
        .add("STL", "St. Louis, MO", America::Chicago)
        .add("TPA", "Tampa, FL", America::New_York)
        .add("TUL", "Tulsa, OK", America::Chicago)
        .add("TUS", "Tucson, AZ", America::Phoenix)
        .build()
}
