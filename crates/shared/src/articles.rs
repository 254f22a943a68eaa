//! Article pools compiled into the binary.
//!
//! Paragraphs follow the order event, consequences, lessons, deeper context.

use crate::catalog::{Article, Category, Source};

pub fn pool_for(category: Category) -> &'static [Article] {
    match category {
        Category::Politics => &POLITICS,
        Category::Economy => &ECONOMY,
        Category::ContemporaryHistory => &CONTEMPORARY_HISTORY,
        Category::Society => &SOCIETY,
        Category::Antiquity => &ANTIQUITY,
    }
}

const BRITANNICA: &str = "Encyclopaedia Britannica";

static POLITICS: [Article; 4] = [
    Article {
        slug: "politik-wiedervereinigung-1990",
        title: "Deutsche Wiedervereinigung 1990",
        paragraphs: &[
            "Am 3. Oktober 1990 trat die Deutsche Demokratische Republik auf Grundlage des Einigungsvertrags der Bundesrepublik Deutschland bei, womit die friedliche Revolution von 1989 politisch vollendet und die deutsche Teilung nach vier Jahrzehnten beendet wurde. Vorausgegangen waren die Montagsdemonstrationen, die Öffnung der innerdeutschen Grenze am 9. November 1989 sowie intensive Zwei-plus-Vier-Verhandlungen mit den Siegermächten des Zweiten Weltkriegs, die den äußeren Rahmen für die Einheit schufen.",
            "Die institutionelle und wirtschaftliche Zusammenführung zweier zuvor strikt getrennter Staatssysteme führte zu Verfassungs- und Verwaltungsreformen, milliardenschweren Aufbauprogrammen sowie einer beschleunigten Integration Deutschlands in die Strukturen der Europäischen Gemeinschaft und der NATO. Zugleich entstand eine langanhaltende Transformationsphase mit dem Abbau nicht wettbewerbsfähiger Industrien, massiver Binnenmigration und der Notwendigkeit, unterschiedliche Erinnerungskulturen miteinander zu verbinden.",
            "Dauerhafte Stabilität nach Regimewechseln setzt voraus, dass politische Teilhabe erweitert, soziale Disparitäten aktiv ausgeglichen und außenpolitische Partnerschaften gepflegt werden, um Vertrauen in neue demokratische Institutionen zu verankern. Außerdem zeigt die Wiedervereinigung, dass neben formalen Verträgen auch kulturelle Verständigung, Medienpluralismus und Bildungsangebote entscheidend sind, um geteilte Gesellschaften wieder zusammenzuführen.",
            "Die Auseinandersetzung mit den unterschiedlichen Diktaturerfahrungen in Ost- und Westdeutschland prägte neue Gedenk- und Bildungsstätten, während der Solidarpakt und der Länderfinanzausgleich bis heute als finanzpolitische Werkzeuge einer Angleichung dienen.",
        ],
        source: Source {
            label: "Bundeszentrale für politische Bildung",
            title: "Der Weg zur Deutschen Einheit",
            url: "https://www.bpb.de/themen/deutsche-einheit/",
            detail: None,
        },
    },
    Article {
        slug: "politik-roemische-vertraege-1957",
        title: "Römische Verträge 1957",
        paragraphs: &[
            "Am 25. März 1957 unterzeichneten Belgien, die Bundesrepublik Deutschland, Frankreich, Italien, Luxemburg und die Niederlande in Rom die Verträge zur Gründung der Europäischen Wirtschaftsgemeinschaft und der Europäischen Atomgemeinschaft. Sie bauten auf der Montanunion von 1951 auf und verlagerten die Zusammenarbeit von Kohle und Stahl auf die gesamte Wirtschaft.",
            "Ein gemeinsamer Markt mit Zollunion, eine gemeinsame Agrarpolitik und supranationale Organe wie Kommission und Gerichtshof entstanden. Aus der Gemeinschaft der Sechs wuchs über mehrere Erweiterungen und Vertragsreformen die heutige Europäische Union.",
            "Wirtschaftliche Verflechtung kann politische Versöhnung tragen, wenn sie in verbindliche Institutionen und gemeinsames Recht eingebettet ist. Die Verträge zeigen, dass kleine, verlässliche Schritte oft tragfähiger sind als große, unverbindliche Entwürfe.",
            "Der Jahrestag der Unterzeichnung wird bis heute für Erklärungen zur Zukunft Europas genutzt, zuletzt 2017 mit der Erklärung von Rom zum sechzigsten Jubiläum.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "European Economic Community",
            url: "https://www.britannica.com/topic/European-Economic-Community",
            detail: None,
        },
    },
    Article {
        slug: "politik-kubakrise-1962",
        title: "Kubakrise 1962",
        paragraphs: &[
            "Im Oktober 1962 entdeckten US-Aufklärungsflugzeuge sowjetische Mittelstreckenraketen auf Kuba. Präsident Kennedy verhängte eine Seeblockade, und für dreizehn Tage standen die Vereinigten Staaten und die Sowjetunion so nah an einem Atomkrieg wie nie zuvor.",
            "Die Krise endete mit dem Abzug der Raketen aus Kuba und der stillen Zusage der USA, ihre Jupiter-Raketen aus der Türkei abzuziehen. Kurz darauf wurde der heiße Draht zwischen Washington und Moskau eingerichtet, 1963 folgte der Vertrag über das teilweise Verbot von Kernwaffentests.",
            "Direkte Kommunikationskanäle zwischen Gegnern und gesichtswahrende Kompromisse sind in Krisen überlebenswichtig. Abschreckung allein schützt nicht vor Fehleinschätzungen, wenn Entscheidungszeiten auf Stunden schrumpfen.",
            "Die Kubakrise gilt als Wendepunkt der Rüstungskontrolle und wird in der Forschung bis heute als Lehrstück für Krisenmanagement und Entscheidungsfindung unter Druck untersucht.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "Cuban missile crisis",
            url: "https://www.britannica.com/event/Cuban-missile-crisis",
            detail: None,
        },
    },
    Article {
        slug: "politik-eu-osterweiterung-2004",
        title: "EU-Osterweiterung 2004",
        paragraphs: &[
            "Am 1. Mai 2004 traten Estland, Lettland, Litauen, Polen, Tschechien, die Slowakei, Ungarn, Slowenien, Malta und Zypern der Europäischen Union bei. Es war die größte Erweiterung in der Geschichte der Union und setzte einen Schlusspunkt unter die Teilung Europas nach dem Kalten Krieg.",
            "Binnenmarkt und Strukturfonds beschleunigten das Wachstum in den neuen Mitgliedstaaten, zugleich wanderten viele Arbeitskräfte nach Westen. Die Institutionen der Union mussten für fünfundzwanzig Mitglieder umgebaut werden, was später in den Vertrag von Lissabon mündete.",
            "Die Aussicht auf Mitgliedschaft war ein starker Anreiz für Rechtsstaatsreformen, doch nach dem Beitritt fehlen vergleichbare Hebel. Erweiterung braucht daher dauerhafte Mechanismen, um gemeinsame Werte abzusichern.",
            "Die Debatten über Übergangsfristen bei der Arbeitnehmerfreizügigkeit prägten die Wahrnehmung der Erweiterung in vielen alten Mitgliedstaaten und wirken in heutigen Beitrittsverhandlungen nach.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "European Union",
            url: "https://www.britannica.com/topic/European-Union",
            detail: None,
        },
    },
];

static ECONOMY: [Article; 4] = [
    Article {
        slug: "wirtschaft-finanzkrise-2008",
        title: "Globale Finanzkrise 2008",
        paragraphs: &[
            "Der Kollaps des US-Immobilienmarktes, der Zerfall komplexer Wertpapierketten und die Insolvenz der Investmentbank Lehman Brothers im September 2008 lösten eine weltweite Vertrauens- und Liquiditätskrise im Finanzsystem aus. In kurzer Zeit verbreiteten sich Schockwellen über sogenannte Schattenbanken, Kreditversicherungen und Derivatemärkte in nahezu alle Volkswirtschaften, weil viele Institute identische, schwer bewertbare Produkte hielten.",
            "Regierungen und Zentralbanken stabilisierten Banken mit Garantien, Verstaatlichungen und Notkrediten, legten große Konjunkturpakete auf und verschärften die Regulierung durch Maßnahmen wie Basel III, Stresstests und Verbraucherschutzauflagen, um das globale Finanzsystem funktionsfähig zu halten. Arbeitslosigkeit und Staatsverschuldung stiegen an, Immobilienmärkte korrigierten sich drastisch und in Europa mündete die Krise in die Staatsschuldenproblematik einzelner Euroländer, was neue Rettungsmechanismen wie den ESM hervorbrachte.",
            "Systemische Risiken entstehen aus Intransparenz, Überhebelung und Anreizkonflikten; nur koordinierte Aufsicht, robuste Eigenkapitalanforderungen und eine Kultur verantwortlichen Risikomanagements verhindern, dass Fehlentwicklungen ganze Volkswirtschaften destabilisieren. Die Krise hat zudem verdeutlicht, dass finanzielle Bildung, klare Haftungsregeln und eine makroprudenzielle Politik nötig sind, um spekulative Blasen frühzeitig einzudämmen.",
            "Die globale Finanzkrise führte zu einem breiten gesellschaftlichen Diskurs über soziale Ungleichheit, die Rolle von Zentralbanken und die Verantwortung internationaler Ratingagenturen, was bis heute Reformen in Unternehmensführung und Nachhaltigkeitsberichterstattung beeinflusst.",
        ],
        source: Source {
            label: "International Monetary Fund",
            title: "The Great Recession",
            url: "https://www.imf.org/en/Publications/WEO/Issues/2016/12/31/World-Economic-Outlook-October-2009-Sustaining-the-Recovery-23332",
            detail: Some("World Economic Outlook 2009"),
        },
    },
    Article {
        slug: "wirtschaft-waehrungsreform-1948",
        title: "Währungsreform 1948",
        paragraphs: &[
            "Am 20. Juni 1948 wurde in den drei westlichen Besatzungszonen die Deutsche Mark eingeführt und die entwertete Reichsmark abgelöst. Jede Person erhielt zunächst ein Kopfgeld von vierzig Mark, Guthaben und Schulden wurden stark abgewertet.",
            "Über Nacht füllten sich die Schaufenster, weil gehortete Waren wieder gegen werthaltiges Geld verkauft wurden. Die Sowjetunion antwortete mit einer eigenen Währungsreform und der Blockade West-Berlins, die die Teilung Deutschlands vertiefte.",
            "Vertrauen in eine stabile Währung ist eine Voraussetzung für funktionierende Märkte. Die Reform zeigt aber auch, dass Sparer und Schuldner sehr ungleich getroffen werden können, wenn Geldwerte neu festgesetzt werden.",
            "Zusammen mit der Aufhebung vieler Preiskontrollen durch Ludwig Erhard gilt die Währungsreform als Startpunkt der sozialen Marktwirtschaft in der späteren Bundesrepublik.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "Berlin blockade",
            url: "https://www.britannica.com/event/Berlin-blockade",
            detail: None,
        },
    },
    Article {
        slug: "wirtschaft-oelkrise-1973",
        title: "Ölpreiskrise 1973",
        paragraphs: &[
            "Während des Jom-Kippur-Krieges im Oktober 1973 drosselten arabische Förderländer ihre Ölproduktion und verhängten ein Embargo gegen Staaten, die Israel unterstützten. Der Ölpreis vervierfachte sich innerhalb weniger Monate.",
            "Industrieländer erlebten Inflation, steigende Arbeitslosigkeit und Stagflation. In der Bundesrepublik galten autofreie Sonntage und Tempolimits, die Internationale Energieagentur wurde gegründet und strategische Ölreserven angelegt.",
            "Einseitige Abhängigkeit von wenigen Rohstofflieferanten macht Volkswirtschaften politisch erpressbar. Energieeffizienz und breit gestreute Bezugsquellen sind eine Frage der Sicherheit, nicht nur der Kosten.",
            "Die Krise beschleunigte Investitionen in Kernkraft, Nordseeöl und Energiesparen und beendete die Nachkriegsphase billiger Energie in Westeuropa.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "OPEC",
            url: "https://www.britannica.com/topic/OPEC",
            detail: None,
        },
    },
    Article {
        slug: "wirtschaft-euro-bargeld-2002",
        title: "Einführung des Euro-Bargelds 2002",
        paragraphs: &[
            "Am 1. Januar 2002 wurden in zwölf Ländern Euro-Banknoten und -Münzen ausgegeben, nachdem der Euro bereits 1999 als Buchgeld eingeführt worden war. Innerhalb weniger Wochen verschwanden nationale Währungen wie D-Mark, Franc und Lira aus dem Alltag.",
            "Wechselkursrisiken und Umtauschkosten im Währungsraum entfielen, Preise wurden grenzüberschreitend vergleichbar. Gleichzeitig verloren die Mitgliedstaaten die Möglichkeit, auf Krisen mit eigener Geldpolitik oder Abwertung zu reagieren.",
            "Eine gemeinsame Währung verlangt mehr als eine gemeinsame Zentralbank: ohne abgestimmte Finanzpolitik und Krisenmechanismen bleiben Ungleichgewichte zwischen den Mitgliedern gefährlich.",
            "Die gefühlte Teuerung nach der Umstellung prägte lange das Bild des Euro in der Öffentlichkeit, obwohl die amtliche Inflationsrate kaum anstieg.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "euro",
            url: "https://www.britannica.com/topic/euro",
            detail: None,
        },
    },
];

static CONTEMPORARY_HISTORY: [Article; 4] = [
    Article {
        slug: "zeitgeschichte-fukushima-2011",
        title: "Reaktorkatastrophe von Fukushima 2011",
        paragraphs: &[
            "Nach einem schweren Erdbeben der Stärke 9,0 und einem daraus resultierenden Tsunami kam es am 11. März 2011 im japanischen Kernkraftwerk Fukushima Daiichi zu Stromausfällen, Ausfällen der Kühlsysteme, mehreren Kernschmelzen und erheblichen radioaktiven Freisetzungen in Luft und Meer. Die Naturkatastrophe zerstörte Notstromaggregate, überflutete Sicherheitsanlagen und brachte Betreiber, Regierung und internationale Helfer in eine hochkomplexe Notfalllage, in der Entscheidungen unter großem Zeitdruck getroffen werden mussten.",
            "Mehr als 150.000 Menschen mussten langfristig evakuiert werden, große landwirtschaftliche Flächen blieben kontaminiert, Japan initiierte einen umfassenden Energieumbau mit verstärkten Investitionen in erneuerbare Quellen, und weltweit wurden Sicherheitsstandards, Stresstests sowie Ausstiegsentscheidungen für Kernkraftwerke neu bewertet. Die soziale und psychologische Belastung für die betroffene Bevölkerung hält bis heute an, und umfangreiche Dekontaminations- sowie Rückbauarbeiten werden noch Jahrzehnte beanspruchen.",
            "Der Umgang mit Hochrisikotechnologien verlangt redundante Schutzsysteme, eine Kultur der Sicherheitsvorsorge und eine offene Krisenkommunikation, damit Bevölkerung, Politik und Betreiber frühzeitig auf Worst-Case-Szenarien vorbereitet sind. Fukushima hat zudem deutlich gemacht, dass Klimawandel-bedingte Extremereignisse in Risikobewertungen stärker berücksichtigt und internationale Notfallkooperationen geübt werden müssen.",
            "Die Katastrophe beschleunigte in Deutschland den beschlossenen Ausstieg aus der Kernenergie, verstärkte weltweit die Forschung an Speichertechnologien und führte zur Einrichtung neuer unabhängiger Sicherheitsbehörden mit erweiterten Prüfkompetenzen.",
        ],
        source: Source {
            label: "International Atomic Energy Agency",
            title: "Fukushima Daiichi Accident Report",
            url: "https://www.iaea.org/publications/10962/the-fukushima-daiichi-accident",
            detail: None,
        },
    },
    Article {
        slug: "zeitgeschichte-mondlandung-1969",
        title: "Mondlandung 1969",
        paragraphs: &[
            "Am 20. Juli 1969 landete die Mondfähre von Apollo 11 im Meer der Ruhe, wenige Stunden später betrat Neil Armstrong als erster Mensch den Mond. Hunderte Millionen Menschen verfolgten die Übertragung live im Fernsehen.",
            "Die Landung entschied den Wettlauf ins All zwischen den USA und der Sowjetunion. Entwicklungen aus dem Apollo-Programm trieben Mikroelektronik, Werkstoffforschung und Software-Engineering voran.",
            "Klare Ziele, langfristige Finanzierung und die Bereitschaft, aus Fehlschlägen wie dem Brand von Apollo 1 zu lernen, machen große technische Vorhaben erst möglich.",
            "Die Bilder der Erde aus dem All veränderten den Blick auf den eigenen Planeten und gelten als Anstoß für die Umweltbewegung der folgenden Jahre.",
        ],
        source: Source {
            label: "NASA",
            title: "Apollo 11",
            url: "https://www.nasa.gov/mission/apollo-11/",
            detail: None,
        },
    },
    Article {
        slug: "zeitgeschichte-tschernobyl-1986",
        title: "Reaktorunglück von Tschernobyl 1986",
        paragraphs: &[
            "In der Nacht zum 26. April 1986 explodierte während eines Sicherheitstests Block 4 des Kernkraftwerks Tschernobyl in der Ukrainischen Sowjetrepublik. Eine radioaktive Wolke zog über große Teile Europas.",
            "Rund um das Kraftwerk wurde eine Sperrzone eingerichtet, die Stadt Prypjat wurde evakuiert und ist bis heute verlassen. Hunderttausende Helfer wurden zur Eindämmung eingesetzt, viele von ihnen mit schweren gesundheitlichen Folgen.",
            "Geheimhaltung verschärft Katastrophen: die späte Information der Bevölkerung kostete wertvolle Zeit. Sicherheitskultur hängt ebenso von Offenheit ab wie von Technik.",
            "Die Vertuschungsversuche beschädigten das Vertrauen in die sowjetische Führung und gelten als ein Faktor, der Glasnost und damit den Wandel im Ostblock beschleunigte.",
        ],
        source: Source {
            label: "International Atomic Energy Agency",
            title: "Chornobyl",
            url: "https://www.iaea.org/topics/chornobyl",
            detail: None,
        },
    },
    Article {
        slug: "zeitgeschichte-world-wide-web-1991",
        title: "Das World Wide Web geht online 1991",
        paragraphs: &[
            "Im August 1991 machte Tim Berners-Lee am Forschungszentrum CERN das World Wide Web öffentlich zugänglich. Es verband Hypertext mit dem Internet und erlaubte, Dokumente auf beliebigen Rechnern über Adressen und Links abzurufen.",
            "Nachdem CERN die Technologie 1993 lizenzfrei freigab, verbreitete sich das Web rasant. Handel, Medien, Wissenschaft und private Kommunikation wurden innerhalb eines Jahrzehnts grundlegend umgestaltet.",
            "Offene Standards ohne Lizenzgebühren können Innovation in einem Tempo ermöglichen, das proprietäre Systeme kaum erreichen. Zugleich braucht eine offene Infrastruktur Regeln gegen Missbrauch und Konzentration.",
            "Die erste Website des CERN wurde 2013 rekonstruiert und ist heute wieder unter ihrer ursprünglichen Adresse abrufbar.",
        ],
        source: Source {
            label: "CERN",
            title: "The birth of the Web",
            url: "https://home.cern/science/computing/birth-web",
            detail: None,
        },
    },
];

static SOCIETY: [Article; 4] = [
    Article {
        slug: "gesellschaft-franzoesische-revolution-1789",
        title: "Französische Revolution 1789",
        paragraphs: &[
            "Am 14. Juli 1789 stürmte die Pariser Bevölkerung die Bastille und setzte damit den Auftakt für einen tiefgreifenden politischen und gesellschaftlichen Wandel in Frankreich, der zur Abschaffung der Feudalordnung, zur Erklärung der Menschen- und Bürgerrechte und zur Umgestaltung staatlicher Macht führte. In den folgenden Jahren prägten verfassunggebende Versammlungen, der politisierte Adel, radikale Clubs und militärische Auseinandersetzungen das Kräftefeld Europas.",
            "Die Revolution inspirierte Bewegungen in ganz Europa und Amerika, verbreitete egalitäre Ideale, führte aber auch zu Gewaltphasen wie der Schreckensherrschaft sowie zu Gegenreaktionen monarchischer Mächte. Langfristig löste sie tiefgreifende Reformen in Verwaltung, Rechtsordnung und Bildung aus und bildete den Nährboden für moderne Nationalstaatskonzepte.",
            "Gesellschaftlicher Wandel benötigt legitime Partizipationskanäle und stabile Institutionen; ohne sie drohen revolutionäre Dynamiken in Gewalt und Autoritarismus umzuschlagen. Die Revolution verdeutlicht, wie wichtig eine breite Repräsentation und soziale Absicherung für die Akzeptanz politischer Systeme ist.",
            "Die Debatten um Freiheit, Gleichheit und Brüderlichkeit beeinflussten das Völkerrecht, die Entwicklung parlamentarischer Systeme und die Codifizierung universeller Menschenrechte, deren Wirkung bis in moderne Verfassungen reicht.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "French Revolution",
            url: "https://www.britannica.com/event/French-Revolution",
            detail: None,
        },
    },
    Article {
        slug: "gesellschaft-frauenwahlrecht-1918",
        title: "Frauenwahlrecht in Deutschland 1918",
        paragraphs: &[
            "Am 12. November 1918 verkündete der Rat der Volksbeauftragten das allgemeine, gleiche Wahlrecht für alle Personen ab zwanzig Jahren, Frauen eingeschlossen. Bei der Wahl zur Nationalversammlung im Januar 1919 gaben Frauen erstmals reichsweit ihre Stimme ab.",
            "Siebenunddreißig Frauen zogen in die Nationalversammlung ein, Marie Juchacz hielt als erste Frau eine Rede in einem deutschen Parlament. Die Gleichberechtigung im Alltag, etwa im Ehe- und Arbeitsrecht, ließ dennoch Jahrzehnte auf sich warten.",
            "Formale Rechte sind ein Anfang, aber keine Garantie für tatsächliche Gleichstellung. Dauerhafter Fortschritt braucht Organisation, Bildung und Vorbilder.",
            "Das Wahlrecht war Ergebnis jahrzehntelanger Arbeit der Frauenbewegung, deren Petitionen und Vereine schon im Kaiserreich politischen Druck aufgebaut hatten.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "woman suffrage",
            url: "https://www.britannica.com/topic/woman-suffrage",
            detail: None,
        },
    },
    Article {
        slug: "gesellschaft-buchdruck-1450",
        title: "Buchdruck mit beweglichen Lettern um 1450",
        paragraphs: &[
            "Um 1450 entwickelte Johannes Gutenberg in Mainz ein Verfahren zum Druck mit beweglichen Metalllettern. Die um 1455 vollendete Gutenberg-Bibel zeigte, dass Bücher in gleichbleibender Qualität und großer Zahl hergestellt werden konnten.",
            "Bücher und Flugschriften wurden billiger und verbreiteten sich rasch. Die Reformation, die wissenschaftliche Revolution und die Vereinheitlichung von Schriftsprachen wären ohne den Buchdruck kaum denkbar gewesen.",
            "Neue Medien verändern nicht nur, wie Wissen verbreitet wird, sondern auch, wer an Debatten teilnehmen kann. Mit ihnen wachsen stets auch Zensur und Propaganda.",
            "Gutenbergs Werkstatt verband Metallguss, Farbenchemie und Pressentechnik zu einem System, das in seinen Grundzügen über Jahrhunderte kaum verändert wurde.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "Johannes Gutenberg",
            url: "https://www.britannica.com/biography/Johannes-Gutenberg",
            detail: None,
        },
    },
    Article {
        slug: "gesellschaft-marsch-auf-washington-1963",
        title: "Marsch auf Washington 1963",
        paragraphs: &[
            "Am 28. August 1963 versammelten sich über 200.000 Menschen in Washington, um für Bürgerrechte, Arbeit und Freiheit zu demonstrieren. Vor dem Lincoln Memorial hielt Martin Luther King Jr. seine Rede \"I Have a Dream\".",
            "Der friedliche Massenprotest erhöhte den Druck auf den Kongress, der 1964 den Civil Rights Act und 1965 den Voting Rights Act verabschiedete. Rassentrennung in öffentlichen Einrichtungen wurde damit gesetzlich verboten.",
            "Gewaltfreier Protest kann breite Mehrheiten gewinnen, wenn er gut organisiert ist und klare Forderungen stellt. Gesetze ändern Strukturen, doch Diskriminierung im Alltag verschwindet nur langsam.",
            "Die Organisation des Marsches durch Gewerkschaften, Kirchen und Bürgerrechtsgruppen gilt bis heute als Vorbild für Bündnisse sozialer Bewegungen.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "March on Washington",
            url: "https://www.britannica.com/event/March-on-Washington",
            detail: None,
        },
    },
];

static ANTIQUITY: [Article; 4] = [
    Article {
        slug: "antike-pax-romana-27-vchr",
        title: "Beginn der Pax Romana 27 v. Chr.",
        paragraphs: &[
            "Mit der Machtübernahme Octavians als Augustus im Jahr 27 v. Chr. konsolidierte sich das Römische Reich nach langjährigen Bürgerkriegen und trat in eine jahrzehntelange Phase relativen Friedens, wirtschaftlicher Stabilität und territorialer Expansion ein, die als Pax Romana bekannt wurde. Reorganisationen von Heer, Verwaltung und Infrastruktur legten die Grundlage für eine zentral gesteuerte Reichsordnung.",
            "Die Pax Romana förderte Handel, Städtebau und kulturellen Austausch im gesamten Mittelmeerraum, stabilisierte Grenzregionen und ermöglichte den Ausbau von Rechtssystemen sowie Verkehrswegen wie Straßen und Aquädukten. Gleichzeitig sicherte sie die Macht des Princeps und veränderte die politische Kultur Roms dauerhaft zugunsten eines kaiserlichen Systems.",
            "Nachhaltige Friedensordnungen entstehen durch legitime Machtstrukturen, effiziente Verwaltung und wirtschaftliche Integration; sie bleiben jedoch anfällig, wenn politische Nachfolge ungeklärt und regionale Interessen unberücksichtigt bleiben. Die Pax Romana illustriert, wie Infrastruktur und Rechtssicherheit zur Stabilisierung großer politischer Einheiten beitragen.",
            "Der kulturelle Austausch während der Pax Romana verbreitete lateinische Sprache, römisches Recht und technische Innovationen, was die Grundlage für europäische Rechts- und Verwaltungstraditionen sowie für das Netzwerk von Handelsrouten legte, auf denen spätere Religionen und Ideen reisten.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "Pax Romana",
            url: "https://www.britannica.com/event/Pax-Romana",
            detail: None,
        },
    },
    Article {
        slug: "antike-marathon-490-vchr",
        title: "Schlacht bei Marathon 490 v. Chr.",
        paragraphs: &[
            "Im Jahr 490 v. Chr. landete ein persisches Heer in der Ebene von Marathon nordöstlich von Athen. Die zahlenmäßig unterlegenen Athener und Plataier unter Miltiades schlugen die Angreifer in die Flucht.",
            "Der Sieg beendete den ersten persischen Feldzug gegen Griechenland und stärkte das Selbstbewusstsein der jungen athenischen Demokratie. Zehn Jahre später folgten mit Thermopylai und Salamis die nächsten Entscheidungen.",
            "Entschlossenheit und geschickte Taktik können zahlenmäßige Unterlegenheit ausgleichen. Der Mythos vom Boten, der die Siegesnachricht nach Athen trug, zeigt zudem, wie schnell Ereignisse zu Legenden werden.",
            "Der moderne Marathonlauf erinnert seit den Olympischen Spielen von 1896 an diese Legende, auch wenn Herodot die Geschichte so nicht überliefert.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "Battle of Marathon",
            url: "https://www.britannica.com/event/Battle-of-Marathon",
            detail: None,
        },
    },
    Article {
        slug: "antike-alexandria-331-vchr",
        title: "Gründung Alexandrias 331 v. Chr.",
        paragraphs: &[
            "Im Jahr 331 v. Chr. gründete Alexander der Große an der Mittelmeerküste Ägyptens die Stadt Alexandria. Unter den Ptolemäern wurde sie zur Hauptstadt eines reichen hellenistischen Königreichs.",
            "Mit dem Leuchtturm von Pharos, dem Museion und der berühmten Bibliothek wurde Alexandria zum wissenschaftlichen Zentrum der antiken Welt. Gelehrte wie Euklid und Eratosthenes arbeiteten hier.",
            "Wissen gedeiht dort, wo Sammlungen, Austausch zwischen Kulturen und Förderung zusammenkommen. Ebenso zeigt der allmähliche Verfall der Bibliothek, wie verletzlich Wissensspeicher ohne dauerhafte Pflege sind.",
            "Die Übersetzung der hebräischen Bibel ins Griechische, die Septuaginta, entstand in Alexandria und prägte die Verbreitung jüdischer und christlicher Texte im Mittelmeerraum.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "Alexandria",
            url: "https://www.britannica.com/place/Alexandria-Egypt",
            detail: None,
        },
    },
    Article {
        slug: "antike-ende-westrom-476",
        title: "Ende des Weströmischen Reiches 476",
        paragraphs: &[
            "Im Jahr 476 setzte der germanische Heerführer Odoaker den jungen Kaiser Romulus Augustulus ab und schickte die kaiserlichen Insignien nach Konstantinopel. Einen weströmischen Kaiser gab es danach nicht mehr.",
            "Auf dem Gebiet des Westreichs entstanden germanische Königreiche, während das Oströmische Reich noch fast tausend Jahre bestand. Römisches Recht, Latein und die Kirche blieben als verbindende Elemente erhalten.",
            "Großreiche zerfallen selten an einem Tag: Finanznot, innere Machtkämpfe und der Verlust von Loyalität an den Grenzen wirkten über Generationen zusammen.",
            "Das Jahr 476 dient bis heute als Grenzmarke zwischen Antike und Mittelalter, auch wenn die Zeitgenossen es kaum als Epochenbruch wahrnahmen.",
        ],
        source: Source {
            label: BRITANNICA,
            title: "Romulus Augustulus",
            url: "https://www.britannica.com/biography/Romulus-Augustulus",
            detail: None,
        },
    },
];
